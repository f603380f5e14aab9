//! Section binder tests
//!
//! Exercise the full binding pass against the in-memory template surface,
//! for both page kinds.

use site_content_sdk::surface::template::{SlotCounts, TemplatePage};
use site_content_sdk::{
    BindIssue, BindPoint, ContentDocument, ContentNode, FormField, NavAnchor, PageContext,
    SectionBinder,
};

fn sample_document() -> ContentDocument {
    serde_json::from_str(
        r#"{
            "site": {
                "title": "Synkope - Rådgivning",
                "description": "Uavhengig rådgivning innen IKT og sikkerhet"
            },
            "navigation": {
                "home": "Hjem", "about": "Om oss", "team": "Team",
                "services": "Tjenester", "contact": "Kontakt"
            },
            "hero": {
                "title": "Linje en<br />Linje to",
                "subtitle": "Erfaring du kan stole på",
                "cta": "Kontakt oss"
            },
            "about": {
                "title": "Om Synkope",
                "description": "Vi er et uavhengig rådgivningsselskap.",
                "focus_areas": {
                    "title": "Fokusområder",
                    "areas": [
                        { "title": "Infrastruktur", "description": "Nett og drift" },
                        { "title": "Sikkerhet", "description": "Styring og kontroll" }
                    ]
                }
            },
            "team": {
                "title": "Vårt team",
                "subtitle": "Menneskene bak Synkope",
                "members": [
                    {
                        "name": "Kari Nordmann",
                        "title": "Seniorrådgiver",
                        "description": "20 års erfaring.",
                        "expertise": "IKT-infrastruktur",
                        "linkedin": "https://linkedin.com/in/karinordmann"
                    },
                    {
                        "name": "Ola Nordmann",
                        "title": "Rådgiver",
                        "description": "Prosjektledelse.",
                        "expertise": "Prosjektstyring"
                    }
                ]
            },
            "services": {
                "title": "Tjenester",
                "subtitle": "Hva vi hjelper med",
                "list": [
                    {
                        "title": "IKT-infrastruktur",
                        "description": "Robust grunnmur",
                        "details": "Design og anskaffelse",
                        "link": "tjenester/ikt-infrastruktur.html"
                    },
                    {
                        "title": "Informasjonssikkerhet",
                        "description": "Trygg drift",
                        "details": "Styringssystemer og revisjon",
                        "link": "tjenester/informasjonssikkerhet.html"
                    }
                ]
            },
            "contact": {
                "title": "Kontakt oss",
                "form": {
                    "name_label": "Navn",
                    "name_placeholder": "Ditt navn",
                    "email_label": "E-post",
                    "email_placeholder": "din@epost.no",
                    "subject_label": "Emne",
                    "subject_placeholder": "Hva gjelder det?",
                    "message_label": "Melding",
                    "message_placeholder": "Skriv din melding her",
                    "submit_button": "Send melding"
                }
            },
            "footer": {
                "copyright": "© 2025 Synkope AS",
                "contact_info": {
                    "company": "Synkope AS",
                    "address": "Storgata 1",
                    "postal": "0155 Oslo",
                    "org_number": "Org.nr. 123 456 789",
                    "email": "post@synkope.no"
                }
            },
            "service_pages": {
                "informasjonssikkerhet": {
                    "title": "Informasjonssikkerhet",
                    "meta_description": "Rådgivning innen informasjonssikkerhet",
                    "content": {
                        "intro": ["Vi hjelper virksomheter med sikkerhet."],
                        "key_competencies": ["ISO 27001", "Risikovurdering"],
                        "standards": "Vi arbeider etter anerkjente standarder.",
                        "sections": {
                            "compliance": {
                                "title": "Compliance",
                                "intro": ["Etterlevelse av regelverk."],
                                "services": ["GDPR", "NIS2"]
                            }
                        }
                    }
                }
            }
        }"#,
    )
    .unwrap()
}

fn main_page() -> TemplatePage {
    TemplatePage::new(SlotCounts {
        focus_areas: 2,
        team_members: 2,
        service_cards: 2,
    })
}

fn main_context() -> PageContext {
    PageContext::resolve("/index.html", false)
}

mod main_page_tests {
    use super::*;

    #[test]
    fn test_all_leaf_fields_reflected() {
        let document = sample_document();
        let mut page = main_page();

        let report = SectionBinder::apply(&document, &main_context(), &mut page);
        assert!(report.is_clean());
        assert_eq!(
            report.sections,
            vec!["site", "navigation", "hero", "about", "team", "services", "contact", "footer"]
        );

        assert_eq!(page.title(), Some("Synkope - Rådgivning"));
        assert_eq!(
            page.meta_description(),
            Some("Uavhengig rådgivning innen IKT og sikkerhet")
        );
        assert_eq!(page.text(BindPoint::NavLink(NavAnchor::About)), Some("Om oss"));
        assert_eq!(
            page.text(BindPoint::HeroSubtitle),
            Some("Erfaring du kan stole på")
        );
        assert_eq!(page.text(BindPoint::HeroCta), Some("Kontakt oss"));
        assert_eq!(page.text(BindPoint::AboutHeading), Some("Om Synkope"));
        assert_eq!(page.text(BindPoint::FocusTitle(1)), Some("Sikkerhet"));
        assert_eq!(
            page.text(BindPoint::FocusDescription(0)),
            Some("Nett og drift")
        );
        assert_eq!(page.text(BindPoint::MemberName(0)), Some("Kari Nordmann"));
        assert_eq!(
            page.link(BindPoint::MemberLink(0)),
            Some("https://linkedin.com/in/karinordmann")
        );
        assert_eq!(
            page.text(BindPoint::MemberExpertise(1)),
            Some("Prosjektstyring")
        );
        assert_eq!(
            page.text(BindPoint::CardTitle(1)),
            Some("Informasjonssikkerhet")
        );
        assert_eq!(
            page.link(BindPoint::CardLink(0)),
            Some("tjenester/ikt-infrastruktur.html")
        );
        assert_eq!(page.text(BindPoint::ContactHeading), Some("Kontakt oss"));
        assert_eq!(page.text(BindPoint::SubmitButton), Some("Send melding"));
        assert_eq!(page.text(BindPoint::FooterCopyright), Some("© 2025 Synkope AS"));
    }

    #[test]
    fn test_form_labels_get_required_marker() {
        let document = sample_document();
        let mut page = main_page();
        SectionBinder::apply(&document, &main_context(), &mut page);

        assert_eq!(page.text(BindPoint::FormLabel(FormField::Name)), Some("Navn *"));
        assert_eq!(page.text(BindPoint::FormLabel(FormField::Email)), Some("E-post *"));
        assert_eq!(
            page.placeholder(BindPoint::FormControl(FormField::Message)),
            Some("Skriv din melding her")
        );
    }

    #[test]
    fn test_hero_title_splits_on_line_break_token() {
        let document = sample_document();
        let mut page = main_page();
        SectionBinder::apply(&document, &main_context(), &mut page);

        let segments = page.split_text(BindPoint::HeroTitle).unwrap();
        assert_eq!(segments, ["Linje en", "Linje to"]);
        assert!(segments.iter().all(|s| !s.contains("<br")));
        assert!(page.text(BindPoint::HeroTitle).is_none());
    }

    #[test]
    fn test_binding_is_idempotent() {
        let document = sample_document();
        let context = main_context();

        let mut once = main_page();
        SectionBinder::apply(&document, &context, &mut once);

        let mut twice = main_page();
        SectionBinder::apply(&document, &context, &mut twice);
        SectionBinder::apply(&document, &context, &mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_placeholder_shortfall_skips_whole_collection() {
        let document = sample_document();
        let mut page = TemplatePage::new(SlotCounts {
            focus_areas: 2,
            team_members: 1,
            service_cards: 2,
        });

        SectionBinder::apply(&document, &main_context(), &mut page);

        // Two members, one placeholder: not even the first slot is written.
        assert_eq!(page.text(BindPoint::MemberName(0)), None);
        assert_eq!(page.text(BindPoint::MemberTitle(0)), None);
        // Headings of the same section still bind.
        assert_eq!(page.text(BindPoint::TeamHeading), Some("Vårt team"));
        // Sibling collections are unaffected.
        assert_eq!(page.text(BindPoint::CardTitle(0)), Some("IKT-infrastruktur"));
    }

    #[test]
    fn test_surplus_placeholders_left_untouched() {
        let document = sample_document();
        let mut page = TemplatePage::new(SlotCounts {
            focus_areas: 4,
            team_members: 4,
            service_cards: 4,
        });

        SectionBinder::apply(&document, &main_context(), &mut page);

        assert_eq!(page.text(BindPoint::MemberName(0)), Some("Kari Nordmann"));
        assert_eq!(page.text(BindPoint::MemberName(1)), Some("Ola Nordmann"));
        assert_eq!(page.text(BindPoint::MemberName(2)), None);
        assert_eq!(page.text(BindPoint::MemberName(3)), None);
    }

    #[test]
    fn test_missing_sections_are_skipped_silently() {
        let document: ContentDocument = serde_json::from_str(
            r#"{ "hero": { "subtitle": "Bare undertittel" } }"#,
        )
        .unwrap();
        let mut page = main_page();

        let report = SectionBinder::apply(&document, &main_context(), &mut page);

        assert!(report.is_clean());
        assert_eq!(report.sections, vec!["hero"]);
        assert_eq!(page.text(BindPoint::HeroSubtitle), Some("Bare undertittel"));
        assert_eq!(page.text(BindPoint::AboutHeading), None);
        assert!(page.title().is_none());
    }

    #[test]
    fn test_missing_target_does_not_stop_siblings() {
        let document = sample_document();
        let mut page = main_page()
            .without(BindPoint::HeroCta)
            .without_meta_description();

        let report = SectionBinder::apply(&document, &main_context(), &mut page);

        assert!(report.is_clean());
        assert_eq!(page.text(BindPoint::HeroCta), None);
        assert!(page.meta_description().is_none());
        // Everything around the missing targets still bound.
        assert_eq!(page.title(), Some("Synkope - Rådgivning"));
        assert_eq!(
            page.text(BindPoint::HeroSubtitle),
            Some("Erfaring du kan stole på")
        );
    }

    #[test]
    fn test_default_navigation_fallback() {
        let mut page = main_page();
        SectionBinder::bind_default_navigation(&mut page);

        assert_eq!(page.text(BindPoint::NavLink(NavAnchor::Home)), Some("Hjem"));
        assert_eq!(page.text(BindPoint::NavLink(NavAnchor::About)), Some("Om oss"));
        assert_eq!(
            page.text(BindPoint::NavLink(NavAnchor::Services)),
            Some("Tjenester")
        );
        // Only navigation has a fallback.
        assert!(page.title().is_none());
        assert_eq!(page.text(BindPoint::HeroSubtitle), None);
    }
}

mod service_page_tests {
    use super::*;

    fn service_page() -> TemplatePage {
        TemplatePage::new(SlotCounts::default())
    }

    #[test]
    fn test_service_page_binding() {
        let document = sample_document();
        let context = PageContext::resolve("/tjenester/informasjonssikkerhet.html", true);
        let mut page = service_page();

        let report = SectionBinder::apply(&document, &context, &mut page);

        assert!(report.is_clean());
        assert_eq!(report.sections, vec!["service-meta", "service-content", "footer"]);
        assert_eq!(page.title(), Some("Informasjonssikkerhet - Synkope"));
        assert_eq!(
            page.meta_description(),
            Some("Rådgivning innen informasjonssikkerhet")
        );
        assert_eq!(
            page.text(BindPoint::ServiceTitle),
            Some("Informasjonssikkerhet")
        );

        let body = page.body(BindPoint::ServiceBody).unwrap();
        assert_eq!(
            body,
            [
                ContentNode::Paragraph("Vi hjelper virksomheter med sikkerhet.".to_string()),
                ContentNode::List(vec!["ISO 27001".to_string(), "Risikovurdering".to_string()]),
                ContentNode::Paragraph("Vi arbeider etter anerkjente standarder.".to_string()),
                ContentNode::Heading("Compliance".to_string()),
                ContentNode::Paragraph("Etterlevelse av regelverk.".to_string()),
                ContentNode::List(vec!["GDPR".to_string(), "NIS2".to_string()]),
            ]
        );
    }

    #[test]
    fn test_service_footer_contact_block() {
        let document = sample_document();
        let context = PageContext::resolve("/tjenester/informasjonssikkerhet.html", true);
        let mut page = service_page();

        SectionBinder::apply(&document, &context, &mut page);

        assert_eq!(page.text(BindPoint::FooterCompany), Some("Synkope AS"));
        assert_eq!(page.text(BindPoint::FooterPostal), Some("0155 Oslo"));
        assert_eq!(page.text(BindPoint::FooterEmail), Some("post@synkope.no"));
        assert_eq!(
            page.link(BindPoint::FooterEmail),
            Some("mailto:post@synkope.no")
        );
        assert_eq!(page.text(BindPoint::FooterCopyright), Some("© 2025 Synkope AS"));
    }

    #[test]
    fn test_unresolved_service_binds_footer_only() {
        let document = sample_document();
        let context = PageContext::resolve("/tjenester/ukjent-tjeneste.html", true);
        let mut page = service_page();

        let report = SectionBinder::apply(&document, &context, &mut page);

        assert_eq!(report.issues, vec![BindIssue::UnresolvedService]);
        assert_eq!(report.sections, vec!["footer"]);
        assert_eq!(page.text(BindPoint::ServiceTitle), None);
        assert!(page.body(BindPoint::ServiceBody).is_none());
        assert!(page.title().is_none());
        assert_eq!(page.text(BindPoint::FooterCopyright), Some("© 2025 Synkope AS"));
    }

    #[test]
    fn test_missing_service_entry_reported() {
        let document = sample_document();
        // "emc" is a known slug, but the sample document has no entry for it.
        let context = PageContext::resolve("/tjenester/emc.html", true);
        let mut page = service_page();

        let report = SectionBinder::apply(&document, &context, &mut page);

        assert_eq!(
            report.issues,
            vec![BindIssue::MissingServiceEntry("emc".to_string())]
        );
        assert_eq!(page.text(BindPoint::ServiceTitle), None);
        assert_eq!(page.text(BindPoint::FooterCompany), Some("Synkope AS"));
    }

    #[test]
    fn test_service_binding_is_idempotent() {
        let document = sample_document();
        let context = PageContext::resolve("/tjenester/informasjonssikkerhet.html", true);

        let mut once = service_page();
        SectionBinder::apply(&document, &context, &mut once);

        let mut twice = service_page();
        SectionBinder::apply(&document, &context, &mut twice);
        SectionBinder::apply(&document, &context, &mut twice);

        assert_eq!(once, twice);
    }
}
