//! End-to-end behaviour of a [`Site`] over an in-memory landing page.
//!
//! Every interaction goes through the dispatch table the way the browser
//! host drives it: look up the bound action, then `Site::handle`.

use fitsense_core::testing::{FakeDocument, FakeElement, MemoryStorage};
use fitsense_core::{
    Action, BindTarget, Document, Element, EventContext, EventKind, Handled, Locale,
    Preferences, Site, SiteConfig, ThemeMode,
};
use fitsense_i18n::landing_catalog;
use pretty_assertions::assert_eq;

struct Page {
    doc: FakeDocument,
    theme_toggle: FakeElement,
    language_toggle: FakeElement,
    menu: FakeElement,
    menu_button: FakeElement,
    menu_link: FakeElement,
    hero_button: FakeElement,
    dead_link: FakeElement,
    plans: FakeElement,
    about: FakeElement,
    translated: Vec<FakeElement>,
}

/// The landing page as served: Spanish markup, no theme class yet.
fn landing_page() -> Page {
    let doc = FakeDocument::new();
    let catalog = landing_catalog();

    let header = doc.append(FakeElement::new("header"));
    let theme_toggle = header.append(FakeElement::new("button").with_id("theme-toggle"));
    let language_toggle =
        header.append(FakeElement::new("button").with_id("language-toggle").with_html("ES"));
    let menu_button = header.append(
        FakeElement::new("button")
            .with_id("mobile-menu-btn")
            .with_html("☰"),
    );
    let menu = header.append(FakeElement::new("nav").with_id("mobile-menu"));

    let mut translated = Vec::new();
    let mut translatable = |parent: &FakeElement, tag: &str, key: &str| {
        let el = parent.append(
            FakeElement::new(tag)
                .with_attr("data-translate", key)
                .with_html(catalog.get(Locale::Es, key).unwrap()),
        );
        translated.push(el.clone());
        el
    };

    let menu_link = menu.append(FakeElement::new("a").with_attr("href", "#beneficios"));
    translatable(&menu_link, "span", "beneficios");

    let hero = doc.append(FakeElement::new("section").with_id("inicio"));
    translatable(&hero, "h1", "heroTitle");
    translatable(&hero, "p", "heroDescription");
    let hero_button = hero.append(
        FakeElement::new("a")
            .with_class("btn-primary")
            .with_attr("href", "#planes"),
    );
    translatable(&hero_button, "span", "heroButton");
    let dead_link = hero.append(FakeElement::new("a").with_attr("href", "#"));

    let benefits = doc.append(FakeElement::new("section").with_id("beneficios"));
    for i in 1..=4 {
        let card = benefits.append(FakeElement::new("div").with_class("benefit-card"));
        translatable(&card, "h3", &format!("benefit{i}Title"));
        translatable(&card, "p", &format!("benefit{i}Desc"));
    }

    let plans = doc.append(FakeElement::new("section").with_id("planes"));
    let card = plans.append(FakeElement::new("div").with_class("plan-card"));
    translatable(&card, "h3", "planPremium");

    let about = doc.append(FakeElement::new("section").with_id("sobre"));
    let about_text = translatable(&about, "p", "sobreDesc1");
    about.append(FakeElement::new("div").with_class("team-member"));

    Page {
        doc,
        theme_toggle,
        language_toggle,
        menu,
        menu_button,
        menu_link,
        hero_button,
        dead_link,
        plans,
        about: about_text,
        translated,
    }
}

fn site_with(storage: &MemoryStorage) -> Site<MemoryStorage> {
    Site::new(SiteConfig::default(), Preferences::new(storage.clone()))
}

/// Fire every action bound to `event` on `target`, like the browser would
/// after a click on `element` (bubbling to the document afterwards).
fn click(site: &mut Site<MemoryStorage>, page: &Page, element: &FakeElement) -> Handled {
    let table = site.bindings(&page.doc);
    let mut handled = Handled::Default;
    for binding in &table {
        if binding.event != EventKind::Click {
            continue;
        }
        let current = match &binding.target {
            BindTarget::Id(id) => page.doc.element_by_id(id).filter(|el| el.contains(element)),
            BindTarget::Selector(sel) => page
                .doc
                .query_all(sel)
                .into_iter()
                .find(|el| el.contains(element)),
            BindTarget::Document => None,
        };
        let ctx = match (&binding.target, current) {
            (BindTarget::Document, _) => EventContext::document(Some(element)),
            (_, Some(current)) => EventContext {
                current_target: Some(current),
                target: Some(element.clone()),
            },
            (_, None) => continue,
        };
        if site.handle(&page.doc, binding.action, &ctx) == Handled::PreventDefault {
            handled = Handled::PreventDefault;
        }
    }
    handled
}

fn text_snapshot(page: &Page) -> Vec<String> {
    page.translated.iter().map(FakeElement::inner_html).collect()
}

#[test]
fn fresh_visit_uses_dark_spanish_defaults() {
    let page = landing_page();
    let storage = MemoryStorage::new();
    let mut site = site_with(&storage);
    site.start(&page.doc);

    let root = page.doc.root_element();
    assert_eq!(site.theme(), ThemeMode::Dark);
    assert!(root.has_class("dark-mode"));
    assert!(!root.has_class("light-mode"));
    assert_eq!(root.attribute("lang").as_deref(), Some("es"));
    assert_eq!(page.theme_toggle.inner_html(), "☀️");
    assert_eq!(page.language_toggle.text(), "ES");
    // Nothing is written until the visitor toggles something.
    assert_eq!(storage.get("darkMode"), None);
    assert_eq!(storage.get("language"), None);
}

#[test]
fn saved_preferences_are_applied_on_start() {
    let page = landing_page();
    let storage = MemoryStorage::new();
    storage.insert("darkMode", "false");
    storage.insert("language", "en");
    let mut site = site_with(&storage);
    site.start(&page.doc);

    let root = page.doc.root_element();
    assert!(root.has_class("light-mode"));
    assert!(!root.has_class("dark-mode"));
    assert_eq!(page.theme_toggle.inner_html(), "🌙");
    assert_eq!(root.attribute("lang").as_deref(), Some("en"));
    for el in &page.translated {
        let key = el.attribute("data-translate").unwrap();
        let expected = landing_catalog().get(Locale::En, &key).unwrap();
        if expected.contains("<strong>") {
            assert_eq!(el.inner_html(), expected, "{key}");
        } else {
            assert_eq!(el.text(), expected, "{key}");
        }
    }
}

#[test]
fn theme_toggle_round_trip() {
    let page = landing_page();
    let storage = MemoryStorage::new();
    let mut site = site_with(&storage);
    site.start(&page.doc);
    let root = page.doc.root_element();

    click(&mut site, &page, &page.theme_toggle);
    assert!(root.has_class("light-mode"));
    assert_eq!(storage.get("darkMode").as_deref(), Some("false"));

    click(&mut site, &page, &page.theme_toggle);
    assert!(root.has_class("dark-mode"));
    assert!(!root.has_class("light-mode"));
    assert_eq!(page.theme_toggle.inner_html(), "☀️");
    assert_eq!(
        page.theme_toggle.attribute("aria-label").as_deref(),
        Some("Cambiar a modo claro")
    );
    assert_eq!(storage.get("darkMode").as_deref(), Some("true"));
}

#[test]
fn language_toggle_round_trip_restores_text() {
    let page = landing_page();
    let storage = MemoryStorage::new();
    let mut site = site_with(&storage);
    site.start(&page.doc);
    let before = text_snapshot(&page);

    click(&mut site, &page, &page.language_toggle);
    assert_eq!(site.locale(), Locale::En);
    assert_eq!(storage.get("language").as_deref(), Some("en"));
    assert_ne!(text_snapshot(&page), before);
    assert_eq!(
        page.about.inner_html(),
        landing_catalog().get(Locale::En, "sobreDesc1").unwrap()
    );

    click(&mut site, &page, &page.language_toggle);
    assert_eq!(text_snapshot(&page), before);
    assert_eq!(page.language_toggle.text(), "ES");
}

#[test]
fn menu_opens_and_closes_by_trigger() {
    let page = landing_page();
    let mut site = site_with(&MemoryStorage::new());
    site.start(&page.doc);
    let body = page.doc.body_element();

    click(&mut site, &page, &page.menu_button);
    assert!(site.menu_open());
    assert!(page.menu.has_class("show"));
    assert_eq!(page.menu_button.inner_html(), "✕");
    assert_eq!(body.style("overflow").as_deref(), Some("hidden"));

    click(&mut site, &page, &page.menu_button);
    assert!(!site.menu_open());
    assert!(!page.menu.has_class("show"));
    assert_eq!(page.menu_button.inner_html(), "☰");
    assert_eq!(body.style("overflow"), None);
}

#[test]
fn menu_link_closes_and_scrolls() {
    let page = landing_page();
    let mut site = site_with(&MemoryStorage::new());
    site.start(&page.doc);

    click(&mut site, &page, &page.menu_button);
    // The click lands on the span inside the link.
    let span = page.doc.query_all("#mobile-menu a span").remove(0);
    let handled = click(&mut site, &page, &span);

    assert_eq!(handled, Handled::PreventDefault);
    assert!(!page.menu.has_class("show"));
    let benefits = page.doc.element_by_id("beneficios").unwrap();
    assert_eq!(benefits.scroll_count(), 1);
    assert_eq!(page.menu_link.attribute("href").as_deref(), Some("#beneficios"));
}

#[test]
fn outside_click_closes_menu() {
    let page = landing_page();
    let mut site = site_with(&MemoryStorage::new());
    site.start(&page.doc);

    click(&mut site, &page, &page.menu_button);
    assert!(page.menu.has_class("show"));

    click(&mut site, &page, &page.plans);
    assert!(!page.menu.has_class("show"));
    assert_eq!(page.doc.body_element().style("overflow"), None);
}

#[test]
fn dead_anchor_prevents_jump_without_scrolling() {
    let page = landing_page();
    let mut site = site_with(&MemoryStorage::new());
    site.start(&page.doc);

    let handled = click(&mut site, &page, &page.dead_link);
    assert_eq!(handled, Handled::PreventDefault);
    for section in page.doc.query_all("section") {
        assert_eq!(section.scroll_count(), 0);
    }
}

#[test]
fn hero_button_hover_and_anchor() {
    let page = landing_page();
    let mut site = site_with(&MemoryStorage::new());
    site.start(&page.doc);

    let ctx = EventContext::on(&page.hero_button);
    site.handle(&page.doc, Action::HoverEnter, &ctx);
    assert_eq!(page.hero_button.style("transform").as_deref(), Some("scale(1.05)"));
    site.handle(&page.doc, Action::HoverLeave, &ctx);
    assert_eq!(page.hero_button.style("transform").as_deref(), Some("scale(1)"));

    click(&mut site, &page, &page.hero_button);
    assert_eq!(page.plans.scroll_count(), 1);
}

#[test]
fn reveal_after_start() {
    let page = landing_page();
    let mut site = site_with(&MemoryStorage::new());
    site.start(&page.doc);

    let cards = site.prepare_reveal(&page.doc);
    assert_eq!(cards.len(), 6);
    assert!(cards.iter().all(|c| c.style("opacity").as_deref() == Some("0")));

    let first = &cards[0];
    assert!(!site.on_intersection(first, false));
    assert!(site.on_intersection(first, true));
    assert!(!site.on_intersection(first, false));
    assert_eq!(first.style("opacity").as_deref(), Some("1"));
    assert!(cards[1..].iter().all(|c| c.style("opacity").as_deref() == Some("0")));
}

#[test]
fn broken_storage_does_not_break_the_page() {
    let page = landing_page();
    let storage = MemoryStorage::new();
    storage.insert("darkMode", "false");
    storage.set_available(false);
    let mut site = site_with(&storage);
    site.start(&page.doc);
    assert_eq!(site.theme(), ThemeMode::Dark);

    click(&mut site, &page, &page.theme_toggle);
    click(&mut site, &page, &page.language_toggle);
    assert_eq!(site.theme(), ThemeMode::Light);
    assert_eq!(site.locale(), Locale::En);
    assert!(page.doc.root_element().has_class("light-mode"));
}

#[test]
fn empty_document_is_a_no_op() {
    let doc = FakeDocument::new();
    let mut site: Site<MemoryStorage> = Site::new(SiteConfig::default(), Preferences::unavailable());
    assert!(site.bindings(&doc).is_empty());
    assert!(site.start(&doc));
    assert!(site.prepare_reveal(&doc).is_empty());
    let ctx = EventContext::default();
    for action in [
        Action::ToggleMobileMenu,
        Action::CloseMobileMenu,
        Action::DismissMobileMenu,
        Action::SmoothScroll,
        Action::HoverEnter,
        Action::HoverLeave,
    ] {
        site.handle(&doc, action, &ctx);
    }
    assert!(!site.menu_open());
}
