//! Service page binding
//!
//! Binds one service's entry: page metadata, hero heading, the regenerated
//! content container, and the shared footer. When the service cannot be
//! resolved or the document has no entry for it, only the footer is bound
//! and the condition is recorded.

use super::{BindIssue, BindReport};
use crate::builder::ServiceContentBuilder;
use crate::models::{ContentDocument, Footer};
use crate::surface::{BindPoint, PageSurface};

/// Suffix appended to service page titles.
const SITE_NAME: &str = "Synkope";

pub(super) fn apply(
    document: &ContentDocument,
    service: Option<&str>,
    page: &mut dyn PageSurface,
    report: &mut BindReport,
) {
    let entry = match service {
        None => {
            report.issue(BindIssue::UnresolvedService);
            None
        }
        Some(key) => match document.service_page(key) {
            Some(entry) => Some(entry),
            None => {
                report.issue(BindIssue::MissingServiceEntry(key.to_string()));
                None
            }
        },
    };

    if let Some(entry) = entry {
        if let Some(title) = &entry.title {
            page.set_document_title(&format!("{} - {}", title, SITE_NAME));
            page.set_text(BindPoint::ServiceTitle, title);
        }
        if let Some(meta_description) = &entry.meta_description {
            page.set_meta_description(meta_description);
        }
        report.section("service-meta");

        if let Some(content) = &entry.content {
            let nodes = ServiceContentBuilder::build(content);
            page.replace_body(BindPoint::ServiceBody, &nodes);
            report.section("service-content");
        }
    }

    // Shared section: bound even when the service itself could not be.
    if let Some(footer) = &document.footer {
        apply_footer(footer, page);
        report.section("footer");
    }
}

fn apply_footer(footer: &Footer, page: &mut dyn PageSurface) {
    if let Some(info) = &footer.contact_info {
        if let Some(company) = &info.company {
            page.set_text(BindPoint::FooterCompany, company);
        }
        if let Some(address) = &info.address {
            page.set_text(BindPoint::FooterAddress, address);
        }
        if let Some(postal) = &info.postal {
            page.set_text(BindPoint::FooterPostal, postal);
        }
        if let Some(org_number) = &info.org_number {
            page.set_text(BindPoint::FooterOrgNumber, org_number);
        }
        if let Some(email) = &info.email {
            page.set_text(BindPoint::FooterEmail, email);
            page.set_link(BindPoint::FooterEmail, &format!("mailto:{}", email));
        }
    }
    if let Some(copyright) = &footer.copyright {
        page.set_text(BindPoint::FooterCopyright, copyright);
    }
}
