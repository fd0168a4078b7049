use egui::{Color32, Pos2};
use sticker_sketchpad::history::History;
use sticker_sketchpad::{DrawableId, DrawableType};

// Helper to commit a short horizontal stroke starting at `x`
fn add_stroke(history: &mut History, x: f32) -> DrawableId {
    let id = history.begin_stroke(Pos2::new(x, 10.0), 2.0, Color32::BLACK);
    history.extend(id, Pos2::new(x + 5.0, 10.0));
    id
}

fn ids(drawables: &[DrawableType]) -> Vec<DrawableId> {
    drawables.iter().map(|d| d.id()).collect()
}

#[test]
fn test_undo_all_then_redo_all_restores_order() {
    let mut history = History::new();
    let original: Vec<DrawableId> = (0..5).map(|i| add_stroke(&mut history, i as f32 * 10.0)).collect();
    let snapshot = history.committed().to_vec();

    for _ in 0..5 {
        assert!(history.undo());
    }
    assert!(history.is_empty());
    assert_eq!(history.redoable().len(), 5);

    for _ in 0..5 {
        assert!(history.redo());
    }
    assert_eq!(ids(history.committed()), original);
    assert_eq!(history.committed(), snapshot.as_slice());
    assert!(!history.can_redo());
}

#[test]
fn test_undo_and_redo_on_empty_are_noops() {
    let mut history = History::new();
    assert!(!history.undo());
    assert!(!history.redo());
    assert!(history.is_empty());
    assert!(history.redoable().is_empty());

    let id = add_stroke(&mut history, 0.0);
    assert!(!history.redo());
    assert_eq!(ids(history.committed()), vec![id]);
}

#[test]
fn test_new_drawable_discards_redo_stack() {
    let mut history = History::new();
    let a = add_stroke(&mut history, 0.0);
    let b = add_stroke(&mut history, 10.0);

    history.undo();
    assert_eq!(ids(history.committed()), vec![a]);
    assert_eq!(ids(history.redoable()), vec![b]);

    let c = history.begin_sticker(Pos2::new(50.0, 50.0), "★", 32.0, Color32::BLACK);
    assert_eq!(ids(history.committed()), vec![a, c]);
    assert!(history.redoable().is_empty());
}

#[test]
fn test_redo_puts_drawable_back_on_top() {
    let mut history = History::new();
    let a = add_stroke(&mut history, 0.0);
    let b = add_stroke(&mut history, 10.0);

    // Undo b, then undo a: redo order is a first, then b
    history.undo();
    history.undo();
    history.redo();
    assert_eq!(ids(history.committed()), vec![a]);
    history.redo();
    assert_eq!(ids(history.committed()), vec![a, b]);
}

#[test]
fn test_drawable_never_in_both_stacks() {
    let mut history = History::new();
    for i in 0..4 {
        add_stroke(&mut history, i as f32);
    }
    for step in 0..10 {
        if step % 3 == 0 {
            history.redo();
        } else {
            history.undo();
        }
        let committed = ids(history.committed());
        assert!(ids(history.redoable()).iter().all(|id| !committed.contains(id)));
        assert_eq!(committed.len() + history.redoable().len(), 4);
    }
}

#[test]
fn test_end_to_end_three_point_stroke() {
    let mut history = History::new();
    let id = history.begin_stroke(Pos2::new(10.0, 10.0), 2.0, Color32::BLACK);
    history.extend(id, Pos2::new(20.0, 10.0));
    history.extend(id, Pos2::new(20.0, 20.0));
    assert_eq!(history.len(), 1);
    let before = history.committed()[0].clone();
    assert_eq!(before.as_stroke().unwrap().points().len(), 3);

    history.undo();
    assert!(history.is_empty());
    assert_eq!(history.redoable().len(), 1);

    history.redo();
    assert_eq!(history.committed(), &[before]);

    history.clear();
    assert!(history.is_empty());
    assert!(history.redoable().is_empty());
}
