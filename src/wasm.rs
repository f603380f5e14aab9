//! WASM entry point
//!
//! Exposes one binding, `bind_page`, wired to the host page after its
//! structural content has loaded. Content failures never surface as
//! thrown errors; the page simply keeps its static markup (plus the
//! navigation fallback on main pages).

use crate::bind::SectionBinder;
use crate::loader::ContentLoader;
use crate::page::{PageContext, PageType};
use crate::source::http::HttpContentBackend;
use crate::surface::dom::DomSurface;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

/// Resolve the page context, load the content document for `language`
/// (default `"no"`) and bind it onto the current page.
///
/// Respects the document-level opt-out marker. A load failure leaves the
/// page's static markup in place; on main pages the built-in navigation
/// labels are still applied.
#[wasm_bindgen]
pub async fn bind_page(language: Option<String>) -> Result<(), JsValue> {
    let Some(mut page) = DomSurface::from_window() else {
        return Err(JsValue::from_str("No document available"));
    };

    if page.binding_disabled() {
        info!("Content binding disabled by page marker");
        return Ok(());
    }

    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());

    let mut context = PageContext::resolve(&path, page.has_service_markup());
    if let Some(language) = language {
        context = context.with_language(language);
    }

    // reqwest only accepts absolute URLs, so the page-relative content
    // base has to be resolved against the page URL up front.
    let content_base = resolve_content_base(&context);
    let mut loader = ContentLoader::with_base(HttpContentBackend::new(""), content_base);
    match loader.load(&context.language).await {
        Ok(document) => {
            let report = SectionBinder::apply(document, &context, &mut page);
            info!(
                "Bound {} sections ({} issues)",
                report.sections.len(),
                report.issues.len()
            );
        }
        Err(e) => {
            warn!("Content load failed, keeping static markup: {}", e);
            if context.page_type == PageType::Main {
                SectionBinder::bind_default_navigation(&mut page);
            }
        }
    }

    Ok(())
}

/// Absolute content base for the current page, resolved the way `fetch`
/// resolves relative requests: against the document base URI (which
/// honors `<base>` tags), falling back to the page URL.
fn resolve_content_base(context: &PageContext) -> String {
    let Some(page_url) = page_base_url() else {
        return context.content_base().to_string();
    };
    web_sys::Url::new_with_base(context.content_base(), &page_url)
        .map(|url| url.href())
        .unwrap_or_else(|_| context.content_base().to_string())
}

fn page_base_url() -> Option<String> {
    let window = web_sys::window()?;
    if let Ok(Some(base)) = window.document()?.base_uri()
        && !base.is_empty()
    {
        return Some(base);
    }
    window.location().href().ok()
}
