// SPDX-License-Identifier: MPL-2.0
use reaction_picker::config::{self, AnimationConfig, Config, GeneralConfig};
use reaction_picker::domain::reaction::Reaction;
use reaction_picker::i18n::fluent::I18n;
use reaction_picker::ui::motion::{Target, Timeline};
use reaction_picker::ui::picker::layout::{Layout, Scene};
use reaction_picker::ui::picker::{labels, Event, Message, ReactionPicker, Zone};
use reaction_picker::ui::theming::ThemeMode;
use iced::Size;
use std::time::{Duration, Instant};
use tempfile::tempdir;

/// Picker plus live timeline, with a clock the test moves by hand.
struct Harness {
    picker: ReactionPicker,
    timeline: Timeline,
    now: Instant,
}

impl Harness {
    fn new() -> Self {
        let now = Instant::now();
        let mut timeline = Timeline::new(now);
        let picker = ReactionPicker::new();
        picker.install(&mut timeline);
        Self {
            picker,
            timeline,
            now,
        }
    }

    fn send(&mut self, message: Message) -> Option<Event> {
        self.picker.update(message, &mut self.timeline)
    }

    fn move_to(&mut self, from: Zone, to: Zone) {
        self.send(Message::PointerMoved { from, to });
    }

    fn advance(&mut self, by: Duration) {
        self.now += by;
        self.timeline.advance(self.now);
    }

    fn settle(&mut self) {
        self.now += Duration::from_secs(2);
        self.timeline.advance(self.now);
    }
}

#[test]
fn celebrate_round_trip_hides_panel_both_times() {
    let mut h = Harness::new();

    h.move_to(Zone::Outside, Zone::Trigger);
    h.settle();
    assert!(h.timeline.sample(Target::Panel).is_shown());

    h.move_to(Zone::Trigger, Zone::Icon(1));
    let event = h.send(Message::ReactionPressed(Reaction::Celebrate));
    assert_eq!(event, Some(Event::SelectionChanged(Some(Reaction::Celebrate))));
    h.settle();
    assert_eq!(h.picker.selected(), Some(Reaction::Celebrate));
    assert!(!h.timeline.sample(Target::Panel).is_shown());
    // Emphasis is a yoyo, so the trigger comes back to rest.
    assert_eq!(h.timeline.sample(Target::Trigger).scale, 1.0);

    h.move_to(Zone::Icon(1), Zone::Trigger);
    h.move_to(Zone::Trigger, Zone::Outside);
    h.move_to(Zone::Outside, Zone::Trigger);
    h.settle();
    h.move_to(Zone::Trigger, Zone::Icon(1));
    let event = h.send(Message::ReactionPressed(Reaction::Celebrate));
    assert_eq!(event, Some(Event::SelectionChanged(None)));
    h.settle();
    assert_eq!(h.picker.selected(), None);
    assert!(!h.timeline.sample(Target::Panel).is_shown());
}

#[test]
fn emphasis_retriggered_mid_flight_comes_back_to_rest() {
    let mut h = Harness::new();
    h.move_to(Zone::Outside, Zone::Trigger);
    h.settle();
    h.move_to(Zone::Trigger, Zone::Icon(3));
    h.send(Message::ReactionPressed(Reaction::Love));

    // Halfway through the first bounce, pick a neighbour while the panel fades.
    h.advance(Duration::from_millis(150));
    assert!(h.timeline.sample(Target::Trigger).scale > 1.0);
    h.move_to(Zone::Icon(3), Zone::Icon(5));
    h.send(Message::ReactionPressed(Reaction::Funny));
    h.settle();

    assert_eq!(h.picker.selected(), Some(Reaction::Funny));
    assert!(!h.timeline.is_animating());
    assert_eq!(h.timeline.sample(Target::Trigger).scale, 1.0);
}

#[test]
fn trigger_click_clears_love() {
    let mut h = Harness::new();
    h.move_to(Zone::Outside, Zone::Trigger);
    h.send(Message::ReactionPressed(Reaction::Love));
    assert_eq!(h.picker.selected(), Some(Reaction::Love));

    assert_eq!(
        h.send(Message::TriggerPressed),
        Some(Event::SelectionChanged(None))
    );
    assert_eq!(h.picker.selected(), None);
    assert_eq!(h.send(Message::TriggerPressed), None);
}

#[test]
fn magnifying_icon_two_pushes_neighbours_apart() {
    let mut h = Harness::new();
    h.move_to(Zone::Outside, Zone::Trigger);
    h.settle();
    h.move_to(Zone::Trigger, Zone::Icon(2));
    h.settle();

    for index in 0..Reaction::COUNT {
        let x = h.timeline.sample(Target::Icon(index)).x;
        match index {
            0 | 1 => assert!(x < 0.0, "icon {index} should move left, got {x}"),
            2 => assert_eq!(x, 0.0),
            _ => assert!(x > 0.0, "icon {index} should move right, got {x}"),
        }
    }
    let magnified = h.timeline.sample(Target::Icon(2));
    assert!((magnified.scale - 1.8).abs() < 1e-4);
    assert!(magnified.y < 0.0);

    let layout = Layout::compute(Size::new(480.0, 280.0), &Scene::sample(&h.timeline));
    assert_eq!(layout.paint_order[Reaction::COUNT - 1], 2);
    let centre = layout.icons[2].center();
    assert_eq!(layout.zone_at(Some(centre)), Zone::Icon(2));
}

#[test]
fn hidden_panel_does_not_capture_pointer() {
    let mut h = Harness::new();
    h.move_to(Zone::Outside, Zone::Trigger);
    h.settle();

    let size = Size::new(480.0, 280.0);
    let open = Layout::compute(size, &Scene::sample(&h.timeline));
    let panel_point = open.icons[0].center();
    assert_eq!(open.zone_at(Some(panel_point)), Zone::Icon(0));

    h.send(Message::ReactionPressed(Reaction::Like));
    h.settle();
    let closed = Layout::compute(size, &Scene::sample(&h.timeline));
    assert_eq!(closed.zone_at(Some(panel_point)), Zone::Outside);
    assert_eq!(closed.zone_at(Some(closed.trigger.center())), Zone::Trigger);
}

#[test]
fn language_and_animation_come_from_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        animation: AnimationConfig {
            time_scale: Some(10.0),
            reduced_motion: Some(true),
        },
    };
    config::save_to_path(&french, &path).expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded.animation.time_scale().value(), 4.0);
    assert!(loaded.animation.reduced_motion());

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(labels::group(&i18n), "Boutons de réaction");

    let cli = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(
        labels::trigger(&cli, Some(Reaction::Insightful)),
        "You reacted with Insightful"
    );
}

#[test]
fn reduced_motion_settles_without_time_passing() {
    let now = Instant::now();
    let mut timeline = Timeline::new(now).with_reduced_motion(true);
    let mut picker = ReactionPicker::new();
    picker.install(&mut timeline);

    picker.update(
        Message::PointerMoved {
            from: Zone::Outside,
            to: Zone::Trigger,
        },
        &mut timeline,
    );
    timeline.advance(now);

    assert!(!timeline.is_animating());
    assert!(timeline.sample(Target::Panel).is_shown());
    assert_eq!(timeline.sample(Target::Icon(5)).opacity, 1.0);
}
