// File: crates/kpi-core/tests/session.rs
// Purpose: Drawing session lifecycle: single session per target, idempotent redraws and teardown.

use kpi_core::{draw_card, layout_card, CardTheme, DisplayModel, Metric, PrimitiveKind, RenderTarget};

fn model(office: &str) -> DisplayModel {
    DisplayModel {
        office: office.into(),
        month: "June".into(),
        overall: 92.3,
        prior_overall: 88.1,
        metrics: vec![
            Metric::new("GM", 4.5, 4.0),
            Metric::new("Production", 97.0, 96.0),
            Metric::new("Stability", 99.1, 99.0),
            Metric::new("Amnts.", 3.2, 3.1),
        ],
        checklist: None,
    }
}

#[test]
fn first_draw_creates_session_and_paints_once() {
    let mut target = RenderTarget::new(480, 300);
    assert!(!target.has_session());
    draw_card(&mut target, model("Austin"));
    let session = target.session().expect("session attached");
    assert_eq!(session.redraws(), 1);
    assert_eq!(session.scene().count(PrimitiveKind::RoundRect), 5);
}

#[test]
fn drawing_twice_never_stacks_primitives() {
    let mut target = RenderTarget::new(480, 300);
    draw_card(&mut target, model("Austin"));
    let once = target.session().expect("session").scene().len();
    draw_card(&mut target, model("Austin"));
    let session = target.session().expect("session");
    assert_eq!(session.scene().len(), once);
    // a fresh session replaced the old one
    assert_eq!(session.redraws(), 1);
}

#[test]
fn redraw_is_idempotent() {
    let mut target = RenderTarget::new(480, 300);
    draw_card(&mut target, model("Austin"));
    let before = target.session().expect("session").scene().clone();
    target.redraw();
    target.redraw();
    let session = target.session().expect("session");
    assert_eq!(session.redraws(), 3);
    assert_eq!(session.scene(), &before);
}

#[test]
fn resize_relays_out_at_new_geometry() {
    let mut target = RenderTarget::new(480, 300);
    draw_card(&mut target, model("Austin"));
    target.resize(640, 320);
    let session = target.session().expect("session");
    assert_eq!(session.size(), (640.0, 320.0));
    let expected = layout_card(640.0, 320.0, session.model(), &CardTheme::STANDARD);
    assert_eq!(session.scene(), &expected);
}

#[test]
fn resize_without_session_only_updates_size() {
    let mut target = RenderTarget::new(100, 100);
    target.resize(200, 150);
    assert_eq!((target.width(), target.height()), (200, 150));
    assert!(!target.has_session());
}

#[test]
fn destroy_without_session_is_noop() {
    let mut target = RenderTarget::new(480, 300);
    target.destroy_session();
    target.destroy_session();
    assert!(!target.has_session());
}

#[test]
fn destroy_releases_session() {
    let mut target = RenderTarget::new(480, 300);
    draw_card(&mut target, model("Austin"));
    target.destroy_session();
    assert!(target.session().is_none());
    target.destroy_session();
    assert!(target.session().is_none());
}

#[test]
fn text_and_session_are_exclusive() {
    let mut target = RenderTarget::new(480, 300);
    draw_card(&mut target, model("Austin"));
    target.show_text("No data");
    assert!(!target.has_session());
    assert_eq!(target.text(), Some("No data"));
    draw_card(&mut target, model("Dallas"));
    assert!(target.text().is_none());
    assert_eq!(target.session().expect("session").model().office, "Dallas");
}
