use egui::{Color32, Rect, pos2};
use shape_drawer::{
    DisplayList, DrawingSession, FileSystem, OsFileSystem, Primitive, SessionConfig, SessionError,
    ShapeKind, ShapeRecord, ShapeStore, ShapeStyle,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

fn new_session() -> DrawingSession<DisplayList> {
    DrawingSession::with_config(SessionConfig::default())
}

/// In-memory files, with optional failures for either direction
#[derive(Default)]
struct MemoryFs {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl FileSystem for MemoryFs {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        if self.fail_reads {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read denied"));
        }
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write_file(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "write denied"));
        }
        self.files.borrow_mut().insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}

fn memory_session(fs: MemoryFs) -> DrawingSession<DisplayList, MemoryFs> {
    DrawingSession::new(ShapeStore::new(), DisplayList::new(), fs, SessionConfig::default())
}

#[test]
fn test_round_trip_every_kind() {
    let dir = tempfile::tempdir().unwrap();

    for (kind, color, size) in [("Circle", "red", 7), ("Rectangle", "#00ff00", 30), ("Line", "Navy", 1)] {
        let path = dir.path().join(format!("{kind}.json"));

        let mut session = new_session();
        session.draw_shape(kind, color, &size.to_string()).unwrap();
        session.save_shapes(Some(&path)).unwrap();

        let mut fresh = new_session();
        fresh.load_shapes(Some(&path)).unwrap();

        assert_eq!(
            fresh.store().records(),
            vec![ShapeRecord::new(kind.parse().unwrap(), color, size)]
        );
        assert!(fresh.store().iter().all(|shape| shape.handle().is_some()));
    }
}

#[test]
fn test_rectangle_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rect.json");

    let mut session = new_session();
    session.draw_shape("Rectangle", "blue", "20").unwrap();
    assert_eq!(
        session.store().records(),
        vec![ShapeRecord::new(ShapeKind::Rectangle, "blue", 20)]
    );
    session.save_shapes(Some(&path)).unwrap();

    let mut loaded = new_session();
    loaded.load_shapes(Some(&path)).unwrap();

    let shape = loaded.store().iter().next().unwrap();
    assert_eq!(shape.to_record(), ShapeRecord::new(ShapeKind::Rectangle, "blue", 20));

    let handle = shape.handle().unwrap();
    assert_eq!(
        loaded.surface().get(handle),
        Some(&Primitive::Rect {
            rect: Rect::from_min_max(pos2(180.0, 130.0), pos2(220.0, 170.0)),
            style: ShapeStyle::solid(Color32::from_rgb(0, 0, 255)),
        })
    );
}

#[test]
fn test_saved_file_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shapes.json");

    let mut session = new_session();
    session.draw_shape("Line", "black", "15").unwrap();
    session.save_shapes(Some(&path)).unwrap();

    let json: serde_json::Value =
        serde_json::from_slice(&OsFileSystem.read_file(&path).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "kind": "Line", "color": "black", "size": 15 }])
    );
}

#[test]
fn test_load_empty_file_clears_everything() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "[]").unwrap();

    let mut session = new_session();
    session.draw_shape("Circle", "red", "10").unwrap();
    session.load_shapes(Some(&path)).unwrap();

    assert!(session.store().is_empty());
    assert!(session.surface().is_empty());
    assert_eq!(session.surface().stats().clears, 2);
}

#[test]
fn test_unknown_kind_leaves_state_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"[{"kind": "Triangle", "color": "red", "size": 5}]"#).unwrap();

    let mut session = new_session();
    session.draw_shape("Circle", "red", "10").unwrap();
    session.on_press(pos2(200.0, 150.0));
    let records = session.store().records();
    let stats = session.surface().stats();

    let result = session.load_shapes(Some(&path));

    assert!(matches!(result, Err(SessionError::Parse(_))));
    assert_eq!(session.store().records(), records);
    assert_eq!(session.surface().stats(), stats);
    assert_eq!(session.surface().len(), 1);
    assert!(session.selected().is_some());
}

#[test]
fn test_file_colors_outside_the_table_still_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("color.json");
    std::fs::write(
        &path,
        r#"[{"kind": "Circle", "color": "lightblue", "size": 5},
            {"kind": "Circle", "color": "plaid", "size": 7}]"#,
    )
    .unwrap();

    let mut session = new_session();
    session.load_shapes(Some(&path)).unwrap();

    assert_eq!(
        session.store().records(),
        vec![
            ShapeRecord::new(ShapeKind::Circle, "lightblue", 5),
            ShapeRecord::new(ShapeKind::Circle, "plaid", 7),
        ]
    );
    assert_eq!(session.surface().len(), 2);

    let drawn: Vec<_> = session
        .store()
        .iter()
        .filter_map(|shape| shape.handle().and_then(|handle| session.surface().get(handle)))
        .cloned()
        .collect();
    assert_eq!(
        drawn,
        vec![
            Primitive::Circle {
                center: pos2(200.0, 150.0),
                radius: 5.0,
                style: ShapeStyle::solid(Color32::from_rgb(173, 216, 230)),
            },
            Primitive::Circle {
                center: pos2(200.0, 150.0),
                radius: 7.0,
                style: ShapeStyle::solid(Color32::BLACK),
            },
        ]
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let mut session = new_session();
    session.draw_shape("Line", "red", "10").unwrap();

    match session.load_shapes(Some(&path)) {
        Err(SessionError::Io { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected an io error, got {other:?}"),
    }
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.surface().len(), 1);
}

#[test]
fn test_write_failure_is_io_error() {
    let mut session = memory_session(MemoryFs {
        fail_writes: true,
        ..Default::default()
    });
    session.draw_shape("Circle", "red", "10").unwrap();

    let result = session.save_shapes(Some(Path::new("out.json")));
    assert!(matches!(result, Err(SessionError::Io { .. })));
    assert_eq!(session.store().len(), 1);
}

#[test]
fn test_read_failure_keeps_drawing() {
    let mut session = memory_session(MemoryFs {
        fail_reads: true,
        ..Default::default()
    });
    session.draw_shape("Rectangle", "red", "10").unwrap();
    let stats = session.surface().stats();

    assert!(session.load_shapes(Some(Path::new("in.json"))).is_err());
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.surface().stats(), stats);
}

#[test]
fn test_cancelled_save_and_load_are_noops() {
    let mut session = memory_session(MemoryFs::default());
    session.draw_shape("Circle", "red", "10").unwrap();
    let stats = session.surface().stats();

    session.save_shapes(None).unwrap();
    session.load_shapes(None).unwrap();

    assert_eq!(session.store().len(), 1);
    assert_eq!(session.surface().stats(), stats);
}

#[test]
fn test_load_renders_in_file_order_at_reference_point() {
    let fs = MemoryFs::default();
    fs.write_file(
        Path::new("many.json"),
        br#"[
            {"kind": "Circle", "color": "red", "size": 5},
            {"kind": "Line", "color": "black", "size": 8}
        ]"#,
    )
    .unwrap();

    let mut session = memory_session(fs);
    session.load_shapes(Some(Path::new("many.json"))).unwrap();

    let primitives: Vec<Primitive> = session.surface().primitives().map(|(_, p)| *p).collect();
    assert_eq!(
        primitives,
        vec![
            Primitive::Circle {
                center: pos2(200.0, 150.0),
                radius: 5.0,
                style: ShapeStyle::solid(Color32::from_rgb(255, 0, 0)),
            },
            Primitive::Line {
                from: pos2(192.0, 150.0),
                to: pos2(208.0, 150.0),
                color: Color32::BLACK,
            },
        ]
    );
}
