// SPDX-License-Identifier: PMPL-1.0-or-later

//! Resolution behaviour of the embedded catalog

use fleetease_i18n::i18n::{Catalog, Lang, Node, Resolved, Resolver};

fn catalog() -> Catalog {
    Catalog::embedded().expect("embedded catalog should load")
}

#[test]
fn test_partial_language_falls_back_to_turkish() {
    let catalog = catalog();
    let de = Resolver::new(&catalog, Lang::De);
    assert_eq!(de.text("testimonials.title"), "Müşterilerimiz Ne Diyor?");
    assert_eq!(de.lookup("testimonials.title").source(), Some(Lang::Tr));
}

#[test]
fn test_sequence_index_traversal() {
    let catalog = catalog();
    let en = Resolver::new(&catalog, Lang::En);
    assert_eq!(en.text("pricing.packages.1.name"), "Professional");
    assert_eq!(en.text("pricing.packages.1.priceMonthly"), "2499");
    assert_eq!(en.text("pricing.packages.2.features.7"), "Custom Training");
}

#[test]
fn test_unknown_key_round_trips() {
    let catalog = catalog();
    let fr = Resolver::new(&catalog, Lang::Fr);
    let resolved = fr.lookup("nonexistent.nested.key");
    assert_eq!(resolved, Resolved::Missing("nonexistent.nested.key"));
    assert_eq!(fr.text("nonexistent.nested.key"), "nonexistent.nested.key");
}

#[test]
fn test_every_default_key_resolves_in_every_language() {
    let catalog = catalog();
    let paths = catalog.tree(Lang::DEFAULT).leaf_paths();
    assert!(!paths.is_empty());

    for lang in Lang::all() {
        let resolver = Resolver::new(&catalog, *lang);
        for path in &paths {
            let resolved = resolver.lookup(path);
            let source = resolved
                .source()
                .unwrap_or_else(|| panic!("{} missed {}", lang, path));
            assert!(
                source == *lang || source == Lang::DEFAULT,
                "{} served {} from {}",
                lang,
                path,
                source
            );
            if source == Lang::DEFAULT && *lang != Lang::DEFAULT {
                assert!(
                    catalog.tree(*lang).at_path(path).is_none(),
                    "{} has {} but fell back anyway",
                    lang,
                    path
                );
            }
        }
    }
}

#[test]
fn test_lookup_is_idempotent() {
    let catalog = catalog();
    for lang in Lang::all() {
        let resolver = Resolver::new(&catalog, *lang);
        for key in ["hero.title", "faq.items.0.q", "missing.key", "pricing.packages"] {
            assert_eq!(resolver.lookup(key), resolver.lookup(key));
        }
    }
}

#[test]
fn test_wrong_shape_in_partial_catalog_falls_back() {
    let catalog = Catalog::from_sources([
        (Lang::Tr, "footer:\n  links:\n    about: \"Hakkımızda\"\n"),
        (Lang::Ru, "footer:\n  links: \"not a mapping\"\n"),
    ])
    .unwrap();
    let ru = Resolver::new(&catalog, Lang::Ru);
    assert_eq!(ru.text("footer.links.about"), "Hakkımızda");
}

#[test]
fn test_zero_and_empty_values_are_not_replaced() {
    let catalog = Catalog::from_sources([
        (Lang::Tr, "hero:\n  badge: \"Rozet\"\n  count: 12\n"),
        (Lang::En, "hero:\n  badge: \"\"\n  count: 0\n"),
    ])
    .unwrap();
    let en = Resolver::new(&catalog, Lang::En);
    assert_eq!(en.lookup("hero.badge").node(), Some(&Node::Text(String::new())));
    assert_eq!(en.lookup("hero.count").node(), Some(&Node::Int(0)));
}

#[test]
fn test_structured_lookup_returns_whole_list() {
    let catalog = catalog();
    let tr = Resolver::new(&catalog, Lang::Tr);
    match tr.lookup("faq.items").node() {
        Some(Node::List(items)) => assert_eq!(items.len(), 5),
        other => panic!("expected faq list, got {:?}", other),
    }
}
