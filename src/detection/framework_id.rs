crate::define_id_enum! {
    /// Framework identifier; `Custom` covers frameworks from caller-supplied catalogs
    FrameworkId {
        Nuxt => "nuxt" : "Nuxt",
        NextJs => "nextjs" : "Next.js",
        Go => "go" : "Go",
        Flutter => "flutter" : "Flutter",
        BaseFramework => "base-framework" : "Base Framework",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_id_serialization() {
        assert_eq!(serde_json::to_string(&FrameworkId::Nuxt).unwrap(), "\"nuxt\"");
        assert_eq!(
            serde_json::to_string(&FrameworkId::BaseFramework).unwrap(),
            "\"base-framework\""
        );
    }

    #[test]
    fn test_framework_id_name() {
        assert_eq!(FrameworkId::NextJs.name(), "Next.js");
        assert_eq!(FrameworkId::Go.to_string(), "Go");
        assert_eq!(FrameworkId::NextJs.id(), "nextjs");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(FrameworkId::from_name("Flutter"), FrameworkId::Flutter);
        assert_eq!(
            FrameworkId::from_name("SvelteKit"),
            FrameworkId::Custom("SvelteKit".to_string())
        );
    }

    #[test]
    fn test_custom_framework_round_trip() {
        let custom = FrameworkId::Custom("Remix".to_string());
        assert_eq!(serde_json::to_string(&custom).unwrap(), "\"Remix\"");

        let parsed: FrameworkId = serde_json::from_str("\"remix\"").unwrap();
        assert_eq!(parsed, FrameworkId::Custom("remix".to_string()));
        assert_eq!(parsed.name(), "remix");
    }

    #[test]
    fn test_all_variants_order() {
        let names: Vec<&str> = FrameworkId::all_variants().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["Nuxt", "Next.js", "Go", "Flutter", "Base Framework"]);
    }
}
