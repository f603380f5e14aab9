//! Main page section binding
//!
//! One function per section, applied in the fixed template order. Each
//! function tolerates missing content and missing targets on its own, so
//! section failures never cross section boundaries.

use super::{BindReport, LINE_BREAK_TOKEN};
use crate::models::{About, Contact, ContentDocument, Footer, Hero, Navigation, Services, Team};
use crate::surface::{BindPoint, Collection, FormField, NavAnchor, PageSurface};
use tracing::debug;

pub(super) fn apply(document: &ContentDocument, page: &mut dyn PageSurface, report: &mut BindReport) {
    if let Some(site) = &document.site {
        if let Some(title) = &site.title {
            page.set_document_title(title);
        }
        if let Some(description) = &site.description {
            page.set_meta_description(description);
        }
        report.section("site");
    }

    if let Some(navigation) = &document.navigation {
        apply_navigation(navigation, page);
        report.section("navigation");
    }
    if let Some(hero) = &document.hero {
        apply_hero(hero, page);
        report.section("hero");
    }
    if let Some(about) = &document.about {
        apply_about(about, page);
        report.section("about");
    }
    if let Some(team) = &document.team {
        apply_team(team, page);
        report.section("team");
    }
    if let Some(services) = &document.services {
        apply_services(services, page);
        report.section("services");
    }
    if let Some(contact) = &document.contact {
        apply_contact(contact, page);
        report.section("contact");
    }
    if let Some(footer) = &document.footer {
        apply_footer(footer, page);
        report.section("footer");
    }
}

pub(super) fn apply_navigation(navigation: &Navigation, page: &mut dyn PageSurface) {
    let labels = [
        (NavAnchor::Home, &navigation.home),
        (NavAnchor::About, &navigation.about),
        (NavAnchor::Team, &navigation.team),
        (NavAnchor::Services, &navigation.services),
        (NavAnchor::Contact, &navigation.contact),
    ];
    for (anchor, label) in labels {
        if let Some(label) = label {
            page.set_text(BindPoint::NavLink(anchor), label);
        }
    }
}

fn apply_hero(hero: &Hero, page: &mut dyn PageSurface) {
    if let Some(title) = &hero.title {
        // The title is the one field where markup-like structure is
        // honored: the literal token becomes an explicit line break and
        // each segment stays plain text.
        let segments: Vec<&str> = title.split(LINE_BREAK_TOKEN).collect();
        page.set_split_text(BindPoint::HeroTitle, &segments);
    }
    if let Some(subtitle) = &hero.subtitle {
        page.set_text(BindPoint::HeroSubtitle, subtitle);
    }
    if let Some(cta) = &hero.cta {
        page.set_text(BindPoint::HeroCta, cta);
    }
}

fn apply_about(about: &About, page: &mut dyn PageSurface) {
    if let Some(title) = &about.title {
        page.set_text(BindPoint::AboutHeading, title);
    }
    if let Some(description) = &about.description {
        page.set_text(BindPoint::AboutDescription, description);
    }

    let Some(focus) = &about.focus_areas else {
        return;
    };
    if let Some(title) = &focus.title {
        page.set_text(BindPoint::FocusHeading, title);
    }

    let slots = page.slot_count(Collection::FocusAreas);
    if slots < focus.areas.len() {
        debug!(
            "Skipping focus areas: {} entries but only {} placeholders",
            focus.areas.len(),
            slots
        );
        return;
    }
    for (index, area) in focus.areas.iter().enumerate() {
        if let Some(title) = &area.title {
            page.set_text(BindPoint::FocusTitle(index), title);
        }
        if let Some(description) = &area.description {
            page.set_text(BindPoint::FocusDescription(index), description);
        }
    }
}

fn apply_team(team: &Team, page: &mut dyn PageSurface) {
    if let Some(title) = &team.title {
        page.set_text(BindPoint::TeamHeading, title);
    }
    if let Some(subtitle) = &team.subtitle {
        page.set_text(BindPoint::TeamSubtitle, subtitle);
    }

    let slots = page.slot_count(Collection::TeamMembers);
    if slots < team.members.len() {
        debug!(
            "Skipping team members: {} entries but only {} placeholders",
            team.members.len(),
            slots
        );
        return;
    }
    for (index, member) in team.members.iter().enumerate() {
        if let Some(name) = &member.name {
            page.set_text(BindPoint::MemberName(index), name);
        }
        if let Some(title) = &member.title {
            page.set_text(BindPoint::MemberTitle(index), title);
        }
        if let Some(description) = &member.description {
            page.set_text(BindPoint::MemberDescription(index), description);
        }
        if let Some(expertise) = &member.expertise {
            page.set_text(BindPoint::MemberExpertise(index), expertise);
        }
        if let Some(linkedin) = &member.linkedin {
            page.set_link(BindPoint::MemberLink(index), linkedin);
        }
    }
}

fn apply_services(services: &Services, page: &mut dyn PageSurface) {
    if let Some(title) = &services.title {
        page.set_text(BindPoint::ServicesHeading, title);
    }
    if let Some(subtitle) = &services.subtitle {
        page.set_text(BindPoint::ServicesSubtitle, subtitle);
    }

    let slots = page.slot_count(Collection::ServiceCards);
    if slots < services.list.len() {
        debug!(
            "Skipping service cards: {} entries but only {} placeholders",
            services.list.len(),
            slots
        );
        return;
    }
    for (index, item) in services.list.iter().enumerate() {
        if let Some(title) = &item.title {
            page.set_text(BindPoint::CardTitle(index), title);
        }
        if let Some(description) = &item.description {
            page.set_text(BindPoint::CardDescription(index), description);
        }
        if let Some(details) = &item.details {
            page.set_text(BindPoint::CardDetails(index), details);
        }
        if let Some(link) = &item.link {
            page.set_link(BindPoint::CardLink(index), link);
        }
    }
}

fn apply_contact(contact: &Contact, page: &mut dyn PageSurface) {
    if let Some(title) = &contact.title {
        page.set_text(BindPoint::ContactHeading, title);
    }

    let Some(form) = &contact.form else {
        return;
    };
    let fields = [
        (FormField::Name, &form.name_label, &form.name_placeholder),
        (FormField::Email, &form.email_label, &form.email_placeholder),
        (
            FormField::Subject,
            &form.subject_label,
            &form.subject_placeholder,
        ),
        (
            FormField::Message,
            &form.message_label,
            &form.message_placeholder,
        ),
    ];
    for (field, label, placeholder) in fields {
        if let Some(label) = label {
            // All form fields are required; the template marks them so.
            page.set_text(BindPoint::FormLabel(field), &format!("{} *", label));
        }
        if let Some(placeholder) = placeholder {
            page.set_placeholder(BindPoint::FormControl(field), placeholder);
        }
    }
    if let Some(submit) = &form.submit_button {
        page.set_text(BindPoint::SubmitButton, submit);
    }
}

/// The main page's footer binding covers the copyright line only; the
/// contact block is bound on service pages, where the template addresses
/// it field by field.
fn apply_footer(footer: &Footer, page: &mut dyn PageSurface) {
    if let Some(copyright) = &footer.copyright {
        page.set_text(BindPoint::FooterCopyright, copyright);
    }
}
