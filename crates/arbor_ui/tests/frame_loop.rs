//! # Frame Loop Tests
//!
//! Drives a `Ui` through resize/update/draw the way a host loop does and
//! checks click recognition, hover, lazy setup and hidden subtrees.

use std::cell::RefCell;
use std::rc::Rc;

use arbor_ui::{
    Direction, Display, DrawList, Handler, InputState, MouseButton, Node, Rect, RenderCommand,
    Size, Ui, UiConfig,
};

type Events = Rc<RefCell<Vec<String>>>;

struct Button {
    name: &'static str,
    events: Events,
}

impl Handler for Button {
    fn handles_pointer(&self) -> bool {
        true
    }

    fn on_click(&mut self, _rect: Rect) {
        self.events.borrow_mut().push(format!("click:{}", self.name));
    }

    fn on_release(&mut self, _rect: Rect, _x: f32, _y: f32, cancelled: bool) {
        if cancelled {
            self.events.borrow_mut().push(format!("cancel:{}", self.name));
        }
    }

    fn draw(&self, rect: Rect, surface: &mut DrawList) {
        surface.text(self.name, rect.x, rect.y, arbor_ui::Color::BLACK, 12.0);
    }
}

/// Follows the pointer; never takes part in hit testing.
struct Cursor {
    at: (f32, f32),
}

impl Handler for Cursor {
    fn update(&mut self, _rect: Rect, _tick: arbor_ui::Tick, input: &InputState) {
        self.at = input.pointer();
    }

    fn draw(&self, _rect: Rect, surface: &mut DrawList) {
        surface.sprite(Rect::new(self.at.0, self.at.1, 16.0, 16.0), "cursor", arbor_ui::Color::WHITE);
    }
}

fn button(name: &'static str, events: &Events) -> Button {
    Button {
        name,
        events: Rc::clone(events),
    }
}

/// A 200x100 toolbar with two 100x100 buttons and an overlay button on top of
/// the first one, plus a full-screen cursor layer.
fn toolbar(events: &Events) -> Node {
    Node::new()
        .size(200.0, 100.0)
        .child(Node::new().id("left").size(100.0, 100.0).handler(button("left", events)))
        .child(Node::new().id("right").size(100.0, 100.0).handler(button("right", events)))
        .child(
            Node::new()
                .id("badge")
                .absolute(10.0, 10.0)
                .size(20.0, 20.0)
                .handler(button("badge", events)),
        )
        .child(Node::new().absolute(0.0, 0.0).handler(Cursor { at: (0.0, 0.0) }))
}

struct Host {
    ui: Ui,
    input: InputState,
}

impl Host {
    fn new(root: Node) -> Self {
        let mut ui = Ui::with_root(UiConfig::default(), root).unwrap();
        ui.resize(800.0, 600.0);
        Self {
            ui,
            input: InputState::new(),
        }
    }

    fn frame(&mut self) -> DrawList {
        self.ui.update(&self.input, 1.0 / 60.0).unwrap();
        let mut surface = DrawList::new();
        self.ui.draw(&mut surface);
        self.input.begin_frame();
        surface
    }

    fn click_at(&mut self, down: (f32, f32), up: (f32, f32)) {
        self.input.set_mouse_pos(down.0, down.1);
        self.input.mouse_button_down(MouseButton::Left);
        self.frame();
        self.input.set_mouse_pos(up.0, up.1);
        self.input.mouse_button_up(MouseButton::Left);
        self.frame();
    }
}

#[test]
fn test_click_fires_once_on_pressed_node() {
    let events = Events::default();
    let mut host = Host::new(toolbar(&events));

    host.click_at((150.0, 50.0), (160.0, 60.0));
    host.frame();

    assert_eq!(*events.borrow(), vec!["click:right"]);
}

#[test]
fn test_release_outside_fires_no_click() {
    let events = Events::default();
    let mut host = Host::new(toolbar(&events));

    host.click_at((150.0, 50.0), (50.0, 50.0));

    assert_eq!(*events.borrow(), vec!["cancel:right"]);
}

#[test]
fn test_drag_out_and_back_fires_no_click() {
    let events = Events::default();
    let mut host = Host::new(toolbar(&events));

    host.input.set_mouse_pos(150.0, 50.0);
    host.input.mouse_button_down(MouseButton::Left);
    host.frame();
    host.input.set_mouse_pos(400.0, 400.0);
    host.frame();
    host.input.set_mouse_pos(150.0, 50.0);
    host.input.mouse_button_up(MouseButton::Left);
    host.frame();

    assert_eq!(*events.borrow(), vec!["cancel:right"]);
}

#[test]
fn test_absolute_overlay_wins_over_sibling_underneath() {
    let events = Events::default();
    let mut host = Host::new(toolbar(&events));

    host.click_at((15.0, 15.0), (15.0, 15.0));
    host.click_at((60.0, 60.0), (60.0, 60.0));

    assert_eq!(*events.borrow(), vec!["click:badge", "click:left"]);
}

#[test]
fn test_hidden_node_is_not_hit_or_drawn() {
    let events = Events::default();
    let mut host = Host::new(toolbar(&events));

    if let Some(badge) = host.ui.root_mut().and_then(|root| root.find_mut("badge")) {
        badge.style_mut().display = Display::None;
    }
    host.click_at((15.0, 15.0), (15.0, 15.0));
    let surface = host.frame();

    assert_eq!(*events.borrow(), vec!["click:left"]);
    let labels: Vec<&str> = surface
        .commands()
        .iter()
        .filter_map(|command| match command {
            RenderCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["left", "right"]);
}

#[test]
fn test_draw_order_is_pre_order() {
    let events = Events::default();
    let mut host = Host::new(toolbar(&events));
    host.input.set_mouse_pos(300.0, 200.0);

    let surface = host.frame();
    let commands = surface.commands();

    assert_eq!(commands.len(), 4);
    assert!(matches!(&commands[0], RenderCommand::Text { text, .. } if text == "left"));
    assert!(matches!(&commands[2], RenderCommand::Text { text, x, .. } if text == "badge" && *x == 10.0));
    assert!(matches!(
        &commands[3],
        RenderCommand::Sprite { bounds, .. } if bounds.x == 300.0 && bounds.y == 200.0
    ));
}

#[test]
fn test_lazy_setup_sees_first_viewport_and_runs_once() {
    let builds = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&builds);
    let mut ui = Ui::deferred(UiConfig::default(), move |viewport: Size| {
        log.borrow_mut().push(viewport);
        Node::new()
            .direction(Direction::Column)
            .child(Node::new().id("header").height(viewport.height / 10.0))
    });

    ui.resize(1280.0, 720.0);
    let input = InputState::new();
    for _ in 0..10 {
        ui.update(&input, 1.0 / 60.0).unwrap();
    }
    ui.resize(640.0, 360.0);
    ui.update(&input, 1.0 / 60.0).unwrap();

    assert_eq!(*builds.borrow(), vec![Size::new(1280.0, 720.0)]);
    // Built once against 1280x720; layout follows the new viewport.
    assert_eq!(ui.rect_of("header"), Some(Rect::new(0.0, 0.0, 640.0, 72.0)));
}

#[test]
fn test_zero_and_negative_viewport_degrade_to_empty_rects() {
    let events = Events::default();
    let mut host = Host::new(Node::new().child(Node::new().grow(1.0).handler(button("only", &events))));

    host.ui.resize(-100.0, 0.0);
    host.frame();

    assert!(host.ui.layout().rects().iter().all(|rect| rect.width == 0.0 && rect.height == 0.0));
}
