//! The landing page translation table.
//!
//! Keys match the `data-translate` attributes in the page markup. The
//! `sobreDesc*` entries carry `<strong>` markup and are written into the
//! page as HTML.

use std::sync::OnceLock;

use tracing::error;

use crate::catalog::{I18nError, LocaleStrings, StringCatalog};
use crate::locale::Locale;

pub(crate) const ES: &[(&str, &str)] = &[
    // Header
    ("inicio", "Inicio"),
    ("beneficios", "Beneficios"),
    ("planes", "Planes"),
    ("sobreNosotros", "Sobre Nosotros"),
    ("registro", "Registro"),
    ("acceder", "Acceder"),
    // Hero
    ("heroTitle", "Transforma tus datos en resultados reales"),
    (
        "heroDescription",
        "FitSense combina inteligencia artificial y entrenamiento personalizado para que alcances tus metas de forma más rápida, segura y motivadora.",
    ),
    ("heroButton", "Comienza ahora gratis"),
    // Benefits
    ("beneficiosTitle", "Beneficios"),
    ("benefit1Title", "Entrenamiento Personalizado"),
    ("benefit1Desc", "Planes personalizados según tu nivel y objetivos."),
    ("benefit2Title", "Progreso en Tiempo Real"),
    ("benefit2Desc", "Comunidad activa que impulsa tu constancia."),
    ("benefit3Title", "Tecnología Inteligente"),
    ("benefit3Desc", "Seguimiento de progreso con métricas visuales."),
    ("benefit4Title", "Motivación Constante"),
    ("benefit4Desc", "Recordatorios y motivación diaria."),
    // Plans
    ("planesTitle", "Planes"),
    ("planFreemium", "Freemium"),
    ("planPremium", "Premium"),
    ("planButton", "Lo quiero"),
    ("freemiumFeature1", "Acceso gratuito a rutinas básicas personalizadas."),
    ("freemiumFeature2", "Seguimiento de progreso con métricas visuales."),
    ("freemiumFeature3", "Comunidad FitSense para motivarte."),
    ("premiumFeature1", "Planes personalizados con IA avanzados"),
    ("premiumFeature2", "Dashboard completo de progreso y logros"),
    ("premiumFeature3", "Acceso a desafíos, insignias y estadísticas premium"),
    ("premiumFeature4", "Recordatorios de hidratación y actividad diaria"),
    // About
    ("sobreTitle", "Sobre Nosotros"),
    (
        "sobreDesc1",
        "<strong>Tech Solutions</strong> es una startup formada por cinco estudiantes de la Universidad Peruana de Ciencias Aplicadas (UPC), dedicada a desarrollar soluciones digitales innovadoras que integran inteligencia artificial y tecnología móvil.",
    ),
    (
        "sobreDesc2",
        "<strong>Nuestro propósito</strong> es transformar la forma en que las personas se relacionan con la tecnología, creando experiencias prácticas, accesibles y personalizadas.",
    ),
    (
        "sobreDesc3",
        "Con <strong>FitSense</strong>, buscamos revolucionar el bienestar digital, ofreciendo una plataforma que combina ciencia, datos y motivación para acompañar a cada usuario en el logro de sus metas fitness.",
    ),
    // Team
    ("equipoTitle", "TechSolutions"),
    // Footer
    ("footerTagline", "Tu asistente IA favorito"),
    ("footerAddress", "Address"),
    ("footerContact", "Contact"),
    ("footerLocation", "Lima, Perú"),
];

pub(crate) const EN: &[(&str, &str)] = &[
    // Header
    ("inicio", "Home"),
    ("beneficios", "Benefits"),
    ("planes", "Plans"),
    ("sobreNosotros", "About Us"),
    ("registro", "Sign Up"),
    ("acceder", "Log In"),
    // Hero
    ("heroTitle", "Transform your data into real results"),
    (
        "heroDescription",
        "FitSense combines artificial intelligence and personalized training so you can reach your goals faster, safer and more motivating.",
    ),
    ("heroButton", "Start now for free"),
    // Benefits
    ("beneficiosTitle", "Benefits"),
    ("benefit1Title", "Personalized Training"),
    ("benefit1Desc", "Customized plans according to your level and goals."),
    ("benefit2Title", "Real-time Progress"),
    ("benefit2Desc", "Active community that drives your consistency."),
    ("benefit3Title", "Smart Technology"),
    ("benefit3Desc", "Progress tracking with visual metrics."),
    ("benefit4Title", "Constant Motivation"),
    ("benefit4Desc", "Daily reminders and motivation."),
    // Plans
    ("planesTitle", "Plans"),
    ("planFreemium", "Freemium"),
    ("planPremium", "Premium"),
    ("planButton", "I want it"),
    ("freemiumFeature1", "Free access to basic personalized routines."),
    ("freemiumFeature2", "Progress tracking with visual metrics."),
    ("freemiumFeature3", "FitSense community to motivate you."),
    ("premiumFeature1", "Advanced AI personalized plans"),
    ("premiumFeature2", "Complete progress and achievements dashboard"),
    ("premiumFeature3", "Access to challenges, badges and premium statistics"),
    ("premiumFeature4", "Hydration and daily activity reminders"),
    // About
    ("sobreTitle", "About Us"),
    (
        "sobreDesc1",
        "<strong>Tech Solutions</strong> is a startup formed by five students from the Peruvian University of Applied Sciences (UPC), dedicated to developing innovative digital solutions that integrate artificial intelligence and mobile technology.",
    ),
    (
        "sobreDesc2",
        "<strong>Our purpose</strong> is to transform the way people relate to technology, creating practical, accessible and personalized experiences.",
    ),
    (
        "sobreDesc3",
        "With <strong>FitSense</strong>, we seek to revolutionize digital wellness, offering a platform that combines science, data and motivation to accompany each user in achieving their fitness goals.",
    ),
    // Team
    ("equipoTitle", "TechSolutions"),
    // Footer
    ("footerTagline", "Your favorite AI assistant"),
    ("footerAddress", "Address"),
    ("footerContact", "Contact"),
    ("footerLocation", "Lima, Peru"),
];

fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::Es => ES,
        Locale::En => EN,
    }
}

/// Build a catalog from per-locale tables, rejecting duplicate keys.
pub(crate) fn catalog_from_tables<'a>(
    tables: impl IntoIterator<Item = (Locale, &'a [(&'a str, &'a str)])>,
) -> Result<StringCatalog, I18nError> {
    let mut catalog = StringCatalog::new();
    for (locale, pairs) in tables {
        catalog.add_locale(locale, LocaleStrings::from_pairs(locale, pairs)?);
    }
    Ok(catalog)
}

/// The process-wide landing page catalog, built on first use.
///
/// A table that fails to build leaves the catalog empty, so every element
/// keeps the text it was served with.
#[must_use]
pub fn landing_catalog() -> &'static StringCatalog {
    static CATALOG: OnceLock<StringCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        catalog_from_tables(Locale::ALL.into_iter().map(|locale| (locale, table(locale))))
            .unwrap_or_else(|err| {
                error!(%err, "landing catalog rejected, page text left untranslated");
                StringCatalog::new()
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tables_have_no_duplicate_keys() {
        for locale in Locale::ALL {
            let strings = LocaleStrings::from_pairs(locale, table(locale));
            assert!(strings.is_ok(), "{locale}: {:?}", strings.err());
        }
    }

    #[test]
    fn duplicate_table_key_rejects_the_catalog() {
        let es: &[(&str, &str)] = &[("inicio", "Inicio"), ("planes", "Planes")];
        let en: &[(&str, &str)] = &[("inicio", "Home"), ("inicio", "Start")];
        let err = catalog_from_tables([(Locale::Es, es), (Locale::En, en)]).unwrap_err();
        assert_eq!(
            err,
            I18nError::DuplicateKey {
                locale: Locale::En,
                key: "inicio".into(),
            }
        );
    }

    #[test]
    fn landing_tables_build_cleanly() {
        let catalog = catalog_from_tables(Locale::ALL.into_iter().map(|l| (l, table(l)))).unwrap();
        assert_eq!(catalog.get(Locale::En, "inicio"), Some("Home"));
        assert_eq!(catalog.all_keys(), landing_catalog().all_keys());
    }

    #[test]
    fn both_locales_cover_every_key() {
        let report = landing_catalog().coverage_report();
        assert_eq!(report.total_keys, ES.len());
        for coverage in &report.locales {
            assert_eq!(coverage.missing, Vec::<String>::new(), "{}", coverage.locale);
        }
        assert!(report.is_complete());
    }

    #[test]
    fn header_entries() {
        let catalog = landing_catalog();
        assert_eq!(catalog.get(Locale::Es, "sobreNosotros"), Some("Sobre Nosotros"));
        assert_eq!(catalog.get(Locale::En, "sobreNosotros"), Some("About Us"));
        assert_eq!(catalog.get(Locale::En, "acceder"), Some("Log In"));
        assert_eq!(catalog.get(Locale::Es, "footerLocation"), Some("Lima, Perú"));
        assert_eq!(catalog.get(Locale::En, "footerLocation"), Some("Lima, Peru"));
    }

    #[test]
    fn about_entries_carry_emphasis_in_both_locales() {
        let catalog = landing_catalog();
        for key in ["sobreDesc1", "sobreDesc2", "sobreDesc3"] {
            for locale in Locale::ALL {
                let text = catalog.get(locale, key).unwrap();
                assert!(text.contains("<strong>"), "{locale}/{key}");
            }
        }
    }

    #[test]
    fn catalog_is_shared() {
        assert!(std::ptr::eq(landing_catalog(), landing_catalog()));
    }
}
