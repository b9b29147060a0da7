//! Tests for longer mutation sequences
//!
//! This covers:
//! - Build-up / reorganize / tear-down chains
//! - Drag-and-drop resolved against the live forest
//! - Rendered output and snapshot integrity after each phase

use anyhow::Result;
use treesmith_core::Forest;
use treesmith_editor::{
    resolve_drop, Document, Mutation, NodeKind, Placement, TargetBox,
};
use treesmith_renderer::render;

fn insert(doc: &mut Document, parent: Option<&str>, kind: NodeKind, name: &str) -> Result<String> {
    let id = doc
        .apply(Mutation::InsertNode {
            parent_id: parent.map(str::to_string),
            kind,
        })?
        .created_id
        .expect("insert returns the created id");

    doc.apply(Mutation::UpdateNode {
        node_id: id.clone(),
        name: Some(name.to_string()),
        comment: None,
    })?;

    Ok(id)
}

#[test]
fn test_build_reorganize_render_sequence() -> Result<()> {
    let mut doc = Document::from_forest("sequence", Forest::new());

    // Build: src/{ lib.rs }, docs/, README.md
    let src = insert(&mut doc, None, NodeKind::Folder, "src")?;
    insert(&mut doc, Some(&src), NodeKind::File, "lib.rs")?;
    let docs = insert(&mut doc, None, NodeKind::Folder, "docs")?;
    let readme = insert(&mut doc, None, NodeKind::File, "README.md")?;

    doc.apply(Mutation::UpdateNode {
        node_id: readme.clone(),
        name: None,
        comment: Some("start here".to_string()),
    })?;

    assert_eq!(
        render(doc.forest()),
        "├─ src/\n\
         │  └─ lib.rs\n\
         ├─ docs/\n\
         └─ README.md  #start here\n"
    );

    // Reorganize: README.md moves under docs/, docs/ reorders above src/
    doc.apply(Mutation::MoveNode {
        node_id: readme.clone(),
        new_parent_id: Some(docs.clone()),
        index: None,
    })?;
    doc.apply(Mutation::ReorderNode {
        node_id: docs.clone(),
        target_id: src.clone(),
        placement: Placement::Before,
        parent_id: None,
    })?;

    assert_eq!(
        render(doc.forest()),
        "├─ docs/\n\
         │  └─ README.md  #start here\n\
         └─ src/\n\
         \u{20}\u{20}\u{20}└─ lib.rs\n"
    );

    // Tear down: deleting docs/ takes README.md with it
    doc.apply(Mutation::DeleteNode { node_id: docs })?;
    assert!(!doc.forest().contains(&readme));
    assert_eq!(doc.forest().node_count(), 2);

    Ok(())
}

#[test]
fn test_drag_sequence_through_the_resolver() -> Result<()> {
    let mut doc = Document::from_forest("drag", Forest::new());
    let row = TargetBox {
        top: 0.0,
        height: 30.0,
    };

    let assets = insert(&mut doc, None, NodeKind::Folder, "assets")?;
    let logo = insert(&mut doc, None, NodeKind::File, "logo.svg")?;

    // Drop logo.svg into the middle of the assets/ row: re-parent
    let mutation = resolve_drop(doc.forest(), &logo, &assets, 15.0, row)
        .expect("middle-of-folder drop resolves");
    doc.apply(mutation)?;
    assert_eq!(doc.forest().parent_of(&logo), Some(Some(assets.as_str())));

    // Dragging assets/ onto its own child resolves to nothing
    assert!(resolve_drop(doc.forest(), &assets, &logo, 15.0, row).is_none());

    // Drop logo.svg on the top edge of assets/: back out to the root list
    let mutation = resolve_drop(doc.forest(), &logo, &assets, 2.0, row)
        .expect("top-edge drop resolves");
    doc.apply(mutation)?;
    assert_eq!(doc.forest().roots[0].id, logo);
    assert_eq!(doc.forest().parent_of(&logo), Some(None));

    Ok(())
}

#[test]
fn test_snapshot_survives_an_editing_session() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("session.json");

    let mut doc = Document::create(path.clone());
    let src = doc.forest().roots[0].id.clone();
    insert(&mut doc, Some(&src), NodeKind::Folder, "components")?;
    doc.apply(Mutation::DeleteNode {
        node_id: doc.forest().roots[1].id.clone(),
    })?;
    doc.save()?;
    let forest = doc.forest().clone();

    let reloaded = Document::load(path)?;

    assert_eq!(reloaded.forest(), &forest);
    assert_eq!(render(reloaded.forest()), render(&forest));
    Ok(())
}
