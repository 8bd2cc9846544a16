//! End-to-end project lifecycle through the public API: init a project on
//! disk, fill cards, persist and reload the catalog, export text files, and
//! check the statistics a user would see along the way.

use cardforge::catalog::{Catalog, FrameDefaults, Project, Subtype, Variant};
use cardforge::export::export_texts;
use cardforge::output::format_stats;
use cardforge::stats::project_stats;
use cardforge::store::{CatalogStore, ProjectContext, list_projects};
use tempfile::TempDir;

#[test]
fn vc_project_lifecycle() {
    let root = TempDir::new().unwrap();

    // init: bulk-create the print run and materialize the layout
    let catalog = Catalog::create(
        Project {
            name: "summer-set".into(),
            variant: Variant::Vc,
        },
        &[(Subtype::Alpha, 50), (Subtype::Omega, 100)],
        &FrameDefaults::default(),
    )
    .unwrap();
    assert_eq!(catalog.cards.len(), 150);

    let ctx = ProjectContext::new(root.path(), "summer-set");
    ctx.create_layout(Variant::Vc).unwrap();
    ctx.store().save(&catalog).unwrap();

    assert!(ctx.dir.join("alpha").is_dir());
    assert!(ctx.dir.join("delta").is_dir());
    assert_eq!(list_projects(root.path()).unwrap(), ["summer-set"]);

    // fill: complete two cards, reloading between edits as the CLI does
    let mut catalog = ctx.store().load().unwrap();
    catalog
        .fill_card(
            Subtype::Alpha,
            1000,
            "Лисиця".into(),
            "Руда і хитра".into(),
            Some("Fox".into()),
        )
        .unwrap();
    ctx.store().save(&catalog).unwrap();

    let mut catalog = ctx.store().load().unwrap();
    catalog
        .fill_card(Subtype::Omega, 4000, "Сова".into(), "Мудра".into(), Some("Owl".into()))
        .unwrap();
    ctx.store().save(&catalog).unwrap();

    // stats: two completed, remaining counts per tier
    let catalog = ctx.store().load().unwrap();
    let stats = project_stats(&catalog);
    assert_eq!(stats.completed, 2);
    let lines = format_stats(&stats, Variant::Vc);
    assert_eq!(lines[0], "Cards created: 2");
    assert!(lines.contains(&" Alpha: 49".to_string()));
    assert!(lines.contains(&" - Ordinary: 14".to_string()));
    assert!(lines.contains(&" Delta: None".to_string()));

    // export: one file per subtype that has completed cards
    let files = export_texts(&catalog, &ctx).unwrap();
    assert_eq!(files.len(), 2);

    let alpha = std::fs::read_to_string(ctx.export_path(Subtype::Alpha)).unwrap();
    assert_eq!(alpha, "001\nЛисиця\nFOX\nРуда і хитра\n");
    let omega = std::fs::read_to_string(ctx.export_path(Subtype::Omega)).unwrap();
    assert_eq!(omega, "001\nСова\nOWL\nМудра\n");
    assert!(!ctx.export_path(Subtype::Delta).exists());
}

#[test]
fn nc_project_lifecycle() {
    let root = TempDir::new().unwrap();

    let mut catalog = Catalog::create(
        Project {
            name: "base-set".into(),
            variant: Variant::Nc,
        },
        &[(Subtype::Ordinary, 100), (Subtype::Special, 50)],
        &FrameDefaults::default(),
    )
    .unwrap();

    let ctx = ProjectContext::new(root.path(), "base-set");
    ctx.create_layout(Variant::Nc).unwrap();

    // the first ordinary tier of a 100-card run holds 33 cards
    for i in 0..33 {
        catalog
            .fill_card(
                Subtype::Ordinary,
                1000,
                format!("Card {i}"),
                "Common".into(),
                None,
            )
            .unwrap();
    }
    assert!(
        catalog
            .fill_card(Subtype::Ordinary, 1000, "Extra".into(), "x".into(), None)
            .is_err()
    );
    ctx.store().save(&catalog).unwrap();

    let catalog = ctx.store().load().unwrap();
    let lines = format_stats(&project_stats(&catalog), Variant::Nc);
    assert_eq!(lines[0], "Cards created: 33");
    // the exhausted tier no longer appears with a nonzero count
    assert!(lines.contains(&" - Ordinary - 1000: 0".to_string()));

    let files = export_texts(&catalog, &ctx).unwrap();
    assert_eq!(files.len(), 1);
    let text = std::fs::read_to_string(&files[0].path).unwrap();
    assert!(text.starts_with("001 Card 0\nCommon\n"));
    assert_eq!(text.lines().count(), 66);
}
