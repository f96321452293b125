use egui::pos2;
use sketchboard::{DrawMode, PointerTarget, SessionState, Tool};

fn pen_session(mode: DrawMode) -> SessionState {
    let mut session = SessionState::new();
    session.set_tool(Tool::Pen);
    session.settings_mut().draw_mode = mode;
    session
}

#[test]
fn free_draw_accumulates_one_point_per_move() {
    let mut session = pen_session(DrawMode::Free);

    session.pointer_down(pos2(0.0, 0.0), PointerTarget::Background);
    session.pointer_moved(pos2(5.0, 5.0));
    session.pointer_moved(pos2(10.0, 10.0));
    session.pointer_up();

    let strokes = session.document().strokes();
    assert_eq!(strokes.len(), 1);
    assert_eq!(
        strokes[0].points(),
        &[pos2(0.0, 0.0), pos2(5.0, 5.0), pos2(10.0, 10.0)]
    );
}

#[test]
fn free_draw_point_count_is_one_plus_moves() {
    let mut session = pen_session(DrawMode::Free);

    session.pointer_down(pos2(1.0, 1.0), PointerTarget::Background);
    for i in 0..20 {
        session.pointer_moved(pos2(i as f32, i as f32 * 2.0));
    }
    session.pointer_up();

    assert_eq!(session.document().strokes()[0].points().len(), 21);
}

#[test]
fn straight_draw_is_a_two_point_rubber_band() {
    let mut session = pen_session(DrawMode::Straight);

    session.pointer_down(pos2(0.0, 0.0), PointerTarget::Background);
    session.pointer_moved(pos2(3.0, 3.0));
    session.pointer_moved(pos2(7.0, 1.0));
    session.pointer_moved(pos2(40.0, 25.0));
    session.pointer_up();

    // Only the origin and the most recent cursor position survive.
    let stroke = &session.document().strokes()[0];
    assert_eq!(stroke.points(), &[pos2(0.0, 0.0), pos2(40.0, 25.0)]);
}

#[test]
fn straight_draw_first_move_appends() {
    let mut session = pen_session(DrawMode::Straight);

    session.pointer_down(pos2(0.0, 0.0), PointerTarget::Background);
    session.pointer_moved(pos2(9.0, 9.0));
    session.pointer_up();

    assert_eq!(
        session.document().strokes()[0].points(),
        &[pos2(0.0, 0.0), pos2(9.0, 9.0)]
    );
}

#[test]
fn draw_mode_is_read_live_during_a_stroke() {
    let mut session = pen_session(DrawMode::Free);

    session.pointer_down(pos2(0.0, 0.0), PointerTarget::Background);
    session.pointer_moved(pos2(1.0, 0.0));
    session.pointer_moved(pos2(2.0, 0.0));
    assert_eq!(session.document().strokes()[0].points().len(), 3);

    // Switching the sub-mode mid-stroke collapses it on the next move.
    session.settings_mut().draw_mode = DrawMode::Straight;
    session.pointer_moved(pos2(30.0, 0.0));
    session.pointer_up();

    assert_eq!(
        session.document().strokes()[0].points(),
        &[pos2(0.0, 0.0), pos2(30.0, 0.0)]
    );
}

#[test]
fn moves_without_an_active_draw_are_ignored() {
    let mut session = pen_session(DrawMode::Free);

    // No pointer-down yet: nothing to extend, nothing to crash.
    session.pointer_moved(pos2(5.0, 5.0));
    assert!(session.document().strokes().is_empty());

    session.pointer_down(pos2(0.0, 0.0), PointerTarget::Background);
    session.pointer_up();

    // After pointer-up the stroke is final; later moves do not extend it.
    session.pointer_moved(pos2(99.0, 99.0));
    assert_eq!(session.document().strokes()[0].points(), &[pos2(0.0, 0.0)]);
}

#[test]
fn style_is_snapshotted_at_creation() {
    let mut session = pen_session(DrawMode::Free);
    session.settings_mut().pen_size = 3;

    session.pointer_down(pos2(0.0, 0.0), PointerTarget::Background);
    session.pointer_up();

    // Later settings changes only affect new strokes.
    session.settings_mut().pen_size = 9;
    session.pointer_down(pos2(10.0, 10.0), PointerTarget::Background);
    session.pointer_up();

    let strokes = session.document().strokes();
    assert_eq!(strokes[0].style().pen_size, 3);
    assert_eq!(strokes[1].style().pen_size, 9);
}

#[test]
fn only_the_last_stroke_is_extended() {
    let mut session = pen_session(DrawMode::Free);

    session.pointer_down(pos2(0.0, 0.0), PointerTarget::Background);
    session.pointer_up();
    session.pointer_down(pos2(50.0, 50.0), PointerTarget::Background);
    session.pointer_moved(pos2(51.0, 51.0));
    session.pointer_up();

    let strokes = session.document().strokes();
    assert_eq!(strokes[0].points().len(), 1);
    assert_eq!(strokes[1].points().len(), 2);
}

#[test]
fn non_pen_tools_create_nothing_on_pointer_down() {
    let mut session = SessionState::new();
    session.set_tool(Tool::Select);
    session.pointer_down(pos2(5.0, 5.0), PointerTarget::Background);
    session.pointer_moved(pos2(6.0, 6.0));
    session.pointer_up();

    session.set_tool(Tool::Calculate);
    session.pointer_down(pos2(5.0, 5.0), PointerTarget::Background);

    assert!(session.document().strokes().is_empty());
    assert!(session.document().text_boxes().is_empty());
}
