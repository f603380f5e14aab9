//! Page surface abstraction
//!
//! Defines the PageSurface trait and implementations for different hosts:
//! - DomSurface: the live browser DOM (for WASM apps)
//! - TemplatePage: in-memory page representation (native hosts, tests)
//!
//! Bind targets are addressed by name ([`BindPoint`]) rather than by raw
//! selector strings. The CSS selectors of the legacy site live only inside
//! the DOM implementation, as a compatibility shim; everything above this
//! seam is selector-free.

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod dom;
pub mod template;

/// Fixed navigation anchors of the main page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAnchor {
    Home,
    About,
    Team,
    Services,
    Contact,
}

impl NavAnchor {
    pub const ALL: [NavAnchor; 5] = [
        NavAnchor::Home,
        NavAnchor::About,
        NavAnchor::Team,
        NavAnchor::Services,
        NavAnchor::Contact,
    ];

    /// URL fragment the navigation link points at.
    pub fn fragment(self) -> &'static str {
        match self {
            NavAnchor::Home => "hjem",
            NavAnchor::About => "om",
            NavAnchor::Team => "team",
            NavAnchor::Services => "tjenester",
            NavAnchor::Contact => "kontakt",
        }
    }
}

/// Contact form fields, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    /// Id of the form control (also the `for` target of its label).
    pub fn control_id(self) -> &'static str {
        match self {
            FormField::Name => "navn",
            FormField::Email => "epost",
            FormField::Subject => "emne",
            FormField::Message => "melding",
        }
    }
}

/// Collections whose templates carry a fixed number of placeholder slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    FocusAreas,
    TeamMembers,
    ServiceCards,
}

/// A named bind target on the page.
///
/// Indexed variants address the n-th placeholder of a collection; the
/// binder checks [`PageSurface::slot_count`] before writing any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindPoint {
    NavLink(NavAnchor),
    HeroTitle,
    HeroSubtitle,
    HeroCta,
    AboutHeading,
    AboutDescription,
    FocusHeading,
    FocusTitle(usize),
    FocusDescription(usize),
    TeamHeading,
    TeamSubtitle,
    MemberName(usize),
    MemberTitle(usize),
    MemberDescription(usize),
    MemberExpertise(usize),
    MemberLink(usize),
    ServicesHeading,
    ServicesSubtitle,
    CardTitle(usize),
    CardDescription(usize),
    CardDetails(usize),
    CardLink(usize),
    ContactHeading,
    FormLabel(FormField),
    FormControl(FormField),
    SubmitButton,
    FooterCopyright,
    FooterCompany,
    FooterAddress,
    FooterPostal,
    FooterOrgNumber,
    FooterEmail,
    /// Heading of a service detail page's hero.
    ServiceTitle,
    /// Content container of a service detail page, regenerated wholesale.
    ServiceBody,
}

impl BindPoint {
    /// The collection and slot index this point addresses, for indexed
    /// points; `None` for singleton targets.
    pub fn slot(self) -> Option<(Collection, usize)> {
        match self {
            BindPoint::FocusTitle(i) | BindPoint::FocusDescription(i) => {
                Some((Collection::FocusAreas, i))
            }
            BindPoint::MemberName(i)
            | BindPoint::MemberTitle(i)
            | BindPoint::MemberDescription(i)
            | BindPoint::MemberExpertise(i)
            | BindPoint::MemberLink(i) => Some((Collection::TeamMembers, i)),
            BindPoint::CardTitle(i)
            | BindPoint::CardDescription(i)
            | BindPoint::CardDetails(i)
            | BindPoint::CardLink(i) => Some((Collection::ServiceCards, i)),
            _ => None,
        }
    }
}

/// Structured content appended into a regenerated container.
///
/// Deliberately a closed vocabulary: content can only ever become plain
/// paragraphs, headings and item lists, never arbitrary markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    Paragraph(String),
    Heading(String),
    List(Vec<String>),
}

/// Write access to a page, host-agnostic.
///
/// Every mutator returns whether the target existed; the binder treats
/// `false` as "skip silently", matching the tolerance of the original
/// site for partially customized templates.
pub trait PageSurface {
    /// Set the document title.
    fn set_document_title(&mut self, title: &str);

    /// Set the meta description content attribute.
    fn set_meta_description(&mut self, description: &str) -> bool;

    /// Set a target's text content. Always plain text.
    fn set_text(&mut self, point: BindPoint, text: &str) -> bool;

    /// Set a target's link destination attribute.
    fn set_link(&mut self, point: BindPoint, href: &str) -> bool;

    /// Set a form control's placeholder attribute.
    fn set_placeholder(&mut self, point: BindPoint, text: &str) -> bool;

    /// Set a target's text as separate segments joined by explicit line
    /// breaks. Only the hero title uses this.
    fn set_split_text(&mut self, point: BindPoint, segments: &[&str]) -> bool;

    /// Number of placeholder slots the page has for a collection.
    fn slot_count(&self, collection: Collection) -> usize;

    /// Clear a container and append the given nodes.
    fn replace_body(&mut self, point: BindPoint, nodes: &[ContentNode]) -> bool;
}
