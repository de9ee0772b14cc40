//! End-to-end dispatch scenarios: capture priorities, scoping, focus
//! routing, and hit-test ordering over a real window.

use std::sync::Arc;

use parking_lot::Mutex;
use trellis::geometry::{Point, Rect};
use trellis::widget::{Layout, LayoutKind};
use trellis::widgets::{Button, Checkbox, Container, DropSurface, Dropdown, List, RadioGroup, Tabs, Textbox};
use trellis::window::Window;
use trellis_core::{Event, Key, PointerButton};

fn press(x: f32, y: f32) -> Event {
    Event::PointerPressed {
        x,
        y,
        button: PointerButton::Primary,
    }
}

fn release(x: f32, y: f32) -> Event {
    Event::PointerReleased {
        x,
        y,
        button: PointerButton::Primary,
    }
}

fn window() -> Window {
    Window::new("test", 800.0, 600.0, true)
}

/// Counter that a widget signal increments.
fn counter() -> (Arc<Mutex<Vec<usize>>>, impl Fn(usize) + Clone) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let log_clone = log.clone();
    (log, move |v| log_clone.lock().push(v))
}

#[test]
fn later_registration_wins_overlapping_click() {
    let mut window = window();
    let shared = Rect::new(100.0, 100.0, 120.0, 40.0);

    let (log, push) = counter();
    let a = window.register(Button::new("A", shared)).unwrap();
    let b = window.register(Button::new("B", shared)).unwrap();

    let push_a = push.clone();
    window
        .registry()
        .button(a)
        .unwrap()
        .clicked
        .connect(move |_| push_a(0));
    let push_b = push;
    window
        .registry()
        .button(b)
        .unwrap()
        .clicked
        .connect(move |_| push_b(1));

    // B registered second: drawn last, on top, hit first.
    assert!(window.handle_event(&press(150.0, 120.0)).was_handled());
    assert_eq!(*log.lock(), vec![1]);
    window.handle_event(&release(150.0, 120.0));

    // Hiding B exposes A at the same point.
    window
        .registry_mut()
        .widget_mut(b)
        .unwrap()
        .core_mut()
        .set_visible(false);
    window.handle_event(&press(150.0, 120.0));
    assert_eq!(*log.lock(), vec![1, 0]);
}

#[test]
fn inactive_container_group_is_excluded_from_hit_testing() {
    let mut window = window();
    let container_id = window
        .register({
            let mut c = Container::new(Rect::new(0.0, 0.0, 800.0, 600.0));
            c.insert_group();
            c.insert_group();
            c
        })
        .unwrap();

    // Two buttons, geometrically identical, one per group.
    let shared = Rect::new(50.0, 50.0, 100.0, 30.0);
    let (log, push) = counter();

    let page0_button = window
        .add_container_child(container_id, 0, Button::new("page0", shared))
        .unwrap();
    let page1_button = window
        .add_container_child(container_id, 1, Button::new("page1", shared))
        .unwrap();

    let push0 = push.clone();
    window
        .registry()
        .button(page0_button)
        .unwrap()
        .clicked
        .connect(move |_| push0(0));
    let push1 = push;
    window
        .registry()
        .button(page1_button)
        .unwrap()
        .clicked
        .connect(move |_| push1(1));

    // Group 0 is active initially; page1's button must not fire even
    // though it overlaps the click point and was registered later.
    window.handle_event(&press(60.0, 60.0));
    window.handle_event(&release(60.0, 60.0));
    assert_eq!(*log.lock(), vec![0]);

    assert!(window.registry().effectively_visible(page0_button));
    assert!(!window.registry().effectively_visible(page1_button));
    // The stored flag is untouched; exclusion is computed.
    assert!(window
        .registry()
        .widget(page1_button)
        .unwrap()
        .core()
        .is_visible());

    window.set_active_container(container_id, 1).unwrap();
    window.handle_event(&press(60.0, 60.0));
    assert_eq!(*log.lock(), vec![0, 1]);
}

#[test]
fn widget_state_survives_group_switches() {
    let mut window = window();
    let container_id = window
        .register({
            let mut c = Container::new(Rect::new(0.0, 0.0, 800.0, 600.0));
            c.insert_group();
            c.insert_group();
            c
        })
        .unwrap();
    let textbox_id = window
        .add_container_child(
            container_id,
            0,
            Textbox::new(Rect::new(10.0, 10.0, 200.0, 24.0), "name"),
        )
        .unwrap();

    // Type into the focused textbox, then page away and back.
    window.handle_event(&press(12.0, 20.0));
    for ch in "hello".chars() {
        window.handle_event(&Event::KeyPressed { key: Key::Char(ch) });
    }
    window.set_active_container(container_id, 1).unwrap();
    window.set_active_container(container_id, 0).unwrap();

    assert_eq!(window.registry().textbox(textbox_id).unwrap().text(), "hello");
}

#[test]
fn dropdown_outside_click_closes_and_falls_through() {
    let mut window = window();
    let (log, push) = counter();

    let under_id = window
        .register(Button::new("under", Rect::new(400.0, 300.0, 100.0, 30.0)))
        .unwrap();
    window
        .registry()
        .button(under_id)
        .unwrap()
        .clicked
        .connect(move |_| push(7));

    let dropdown_id = window
        .register(Dropdown::new(
            Rect::new(10.0, 10.0, 120.0, 24.0),
            vec!["one".into(), "two".into()],
        ))
        .unwrap();

    // Open the dropdown.
    window.handle_event(&press(20.0, 20.0));
    assert!(window.registry().dropdown(dropdown_id).unwrap().is_open());
    window.handle_event(&release(20.0, 20.0));

    // Click on the button far outside the open list: the dropdown closes
    // AND the same event reaches the button in the same pass.
    assert!(window.handle_event(&press(450.0, 315.0)).was_handled());
    assert!(!window.registry().dropdown(dropdown_id).unwrap().is_open());
    assert_eq!(*log.lock(), vec![7]);
}

#[test]
fn dropdown_option_click_selects_and_notifies() {
    let mut window = window();
    let (log, push) = counter();
    let dropdown_id = window
        .register(Dropdown::new(
            Rect::new(10.0, 10.0, 120.0, 24.0),
            vec!["one".into(), "two".into(), "three".into()],
        ))
        .unwrap();
    window
        .registry()
        .dropdown(dropdown_id)
        .unwrap()
        .selection_changed
        .connect(move |&i| push(i));

    window.handle_event(&press(20.0, 20.0)); // open
    window.handle_event(&release(20.0, 20.0));
    // Option rows stack below the box: row 1 spans y = 58..82.
    window.handle_event(&press(20.0, 60.0));

    let dropdown = window.registry().dropdown(dropdown_id).unwrap();
    assert!(!dropdown.is_open());
    assert_eq!(dropdown.selected_index(), 1);
    assert_eq!(*log.lock(), vec![1]);
}

#[test]
fn keyboard_routes_only_to_focused_textbox() {
    let mut window = window();
    let first = window
        .register(Textbox::new(Rect::new(10.0, 10.0, 160.0, 24.0), ""))
        .unwrap();
    let second = window
        .register(Textbox::new(Rect::new(10.0, 60.0, 160.0, 24.0), ""))
        .unwrap();

    // No focus yet: keys are dropped.
    assert!(!window
        .handle_event(&Event::KeyPressed { key: Key::Char('x') })
        .was_handled());

    window.handle_event(&press(12.0, 20.0));
    window.handle_event(&Event::KeyPressed { key: Key::Char('a') });

    // Clicking the second textbox moves focus; subsequent keys go there.
    window.handle_event(&press(12.0, 70.0));
    window.handle_event(&Event::KeyPressed { key: Key::Char('b') });

    assert_eq!(window.registry().textbox(first).unwrap().text(), "a");
    assert_eq!(window.registry().textbox(second).unwrap().text(), "b");
    assert!(!window.registry().textbox(first).unwrap().is_focused());
    assert!(window.registry().textbox(second).unwrap().is_focused());
}

#[test]
fn defocus_flushes_pending_edit_once() {
    let mut window = window();
    let textbox_id = window
        .register(Textbox::new(Rect::new(10.0, 10.0, 160.0, 24.0), ""))
        .unwrap();
    let flushed = Arc::new(Mutex::new(Vec::new()));
    let flushed_clone = flushed.clone();
    window
        .registry()
        .textbox(textbox_id)
        .unwrap()
        .text_changed
        .connect(move |text| flushed_clone.lock().push(text.clone()));

    window.handle_event(&press(12.0, 20.0));
    for ch in "hi".chars() {
        window.handle_event(&Event::KeyPressed { key: Key::Char(ch) });
    }
    // Nothing flushed while the edit is pending.
    assert!(flushed.lock().is_empty());

    // A click on empty space defocuses and flushes exactly once.
    window.handle_event(&press(700.0, 500.0));
    assert_eq!(*flushed.lock(), vec!["hi".to_string()]);

    // Re-focusing and leaving without edits flushes nothing more.
    window.handle_event(&press(12.0, 20.0));
    window.handle_event(&press(700.0, 500.0));
    assert_eq!(flushed.lock().len(), 1);
}

#[test]
fn cursor_position_follows_click_offset() {
    let mut window = window();
    let textbox_id = window
        .register(Textbox::new(Rect::new(100.0, 10.0, 200.0, 24.0), ""))
        .unwrap();
    window
        .registry_mut()
        .textbox_mut(textbox_id)
        .unwrap()
        .set_text("abcdef");

    // Click three nominal glyph cells into the text.
    window.handle_event(&press(100.0 + 3.0 * 8.0 + 1.0, 20.0));
    assert_eq!(window.registry().textbox(textbox_id).unwrap().cursor_pos(), 3);
}

#[test]
fn radio_selection_is_mutually_exclusive_through_dispatch() {
    let mut window = window();
    let group_id = window.register(RadioGroup::new()).unwrap();
    for i in 0..3 {
        window
            .add_radio_member(group_id, Point::new(10.0, 10.0 + 30.0 * i as f32), format!("r{i}"))
            .unwrap();
    }
    let (log, push) = counter();
    window
        .registry()
        .radio_group(group_id)
        .unwrap()
        .selection_changed
        .connect(move |&i| push(i));

    window.handle_event(&press(15.0, 72.0)); // third member
    window.handle_event(&release(15.0, 72.0));
    window.handle_event(&press(15.0, 12.0)); // first member

    let group = window.registry().radio_group(group_id).unwrap();
    assert_eq!(group.selected_index(), Some(0));
    let selected: Vec<bool> = group.members().iter().map(|m| m.is_selected()).collect();
    assert_eq!(selected, vec![true, false, false]);
    assert_eq!(*log.lock(), vec![2, 0]);
}

#[test]
fn tab_header_click_switches_scope() {
    let mut window = window();
    let tabs_id = window
        .register({
            let mut tabs = Tabs::new(Rect::new(0.0, 0.0, 400.0, 300.0));
            tabs.insert_tab("first");
            tabs.insert_tab("second");
            tabs
        })
        .unwrap();

    let shared = Rect::new(50.0, 100.0, 120.0, 30.0);
    let first_child = window.add_tab_child(tabs_id, 0, Checkbox::new("a", Point::new(50.0, 100.0))).unwrap();
    let second_child = window.add_tab_child(tabs_id, 1, Button::new("b", shared)).unwrap();

    assert!(window.registry().effectively_visible(first_child));
    assert!(!window.registry().effectively_visible(second_child));

    // Click the second tab's header (right half of the 400-wide strip).
    window.handle_event(&press(300.0, 10.0));
    assert_eq!(window.registry().tabs(tabs_id).unwrap().active_tab(), 1);
    assert!(!window.registry().effectively_visible(first_child));
    assert!(window.registry().effectively_visible(second_child));
}

#[test]
fn file_drop_routes_to_containing_surface_only() {
    let mut window = window();
    let surface_id = window
        .register(DropSurface::new(Rect::new(100.0, 100.0, 200.0, 150.0), "Drop file here"))
        .unwrap();
    let drops = Arc::new(Mutex::new(Vec::new()));
    let drops_clone = drops.clone();
    window
        .registry()
        .drop_surface(surface_id)
        .unwrap()
        .file_dropped
        .connect(move |(mime, path)| drops_clone.lock().push((mime.clone(), path.clone())));

    // A drop outside the surface is dropped silently.
    let missed = window.handle_event(&Event::FileDropped {
        x: 10.0,
        y: 10.0,
        mime: "text/plain".into(),
        path: "/tmp/notes.txt".into(),
    });
    assert!(!missed.was_handled());
    assert!(!window.registry().drop_surface(surface_id).unwrap().is_file_dropped());

    let hit = window.handle_event(&Event::FileDropped {
        x: 150.0,
        y: 150.0,
        mime: "application/zip".into(),
        path: "/tmp/bundle.zip".into(),
    });
    assert!(hit.was_handled());

    let surface = window.registry().drop_surface(surface_id).unwrap();
    assert!(surface.is_file_dropped());
    assert_eq!(surface.message(), "bundle.zip");
    assert_eq!(
        *drops.lock(),
        vec![("application/zip".to_string(), "/tmp/bundle.zip".to_string())]
    );

    window
        .registry_mut()
        .drop_surface_mut(surface_id)
        .unwrap()
        .clear();
    assert_eq!(
        window.registry().drop_surface(surface_id).unwrap().message(),
        "Drop file here"
    );
}

#[test]
fn scroll_reaches_topmost_list_under_pointer() {
    let mut window = window();
    let list_id = window
        .register({
            let mut list = List::new(Rect::new(10.0, 10.0, 200.0, 100.0));
            for i in 0..10 {
                list.add_item(format!("row {i}"), "");
            }
            list
        })
        .unwrap();

    window.handle_event(&Event::Scroll {
        x: 50.0,
        y: 50.0,
        delta: -40.0,
    });
    assert_eq!(window.registry().list(list_id).unwrap().scroll_offset(), 40.0);

    // Scrolling away from the list is ignored.
    let result = window.handle_event(&Event::Scroll {
        x: 500.0,
        y: 500.0,
        delta: -40.0,
    });
    assert!(!result.was_handled());
}

#[test]
fn menu_is_exclusive_and_falls_through_on_outside_click() {
    let mut window = window();
    let (log, push) = counter();

    let button_id = window
        .register(Button::new("under", Rect::new(300.0, 300.0, 100.0, 30.0)))
        .unwrap();
    window
        .registry()
        .button(button_id)
        .unwrap()
        .clicked
        .connect(move |_| push(99));

    window.set_menu();
    let file = window.add_menu_entry("File").unwrap();
    let edit = window.add_menu_entry("Edit").unwrap();
    let quit = window.add_menu_element(file, "Quit").unwrap();
    window.add_menu_element(edit, "Copy").unwrap();

    let activated = Arc::new(Mutex::new(0));
    let activated_clone = activated.clone();
    window
        .menu()
        .unwrap()
        .entry(file)
        .unwrap()
        .element(quit)
        .unwrap()
        .activated
        .connect(move |_| *activated_clone.lock() += 1);

    // Open "File" (its title starts at x=0 on the bar).
    window.handle_event(&press(10.0, 10.0));
    assert_eq!(window.menu().unwrap().open_entry(), Some(file));
    window.handle_event(&release(10.0, 10.0));

    // Clicking "Edit"'s title swaps the open entry (mutual exclusion).
    window.handle_event(&press(50.0, 10.0));
    assert_eq!(window.menu().unwrap().open_entry(), Some(edit));
    window.handle_event(&release(50.0, 10.0));

    // Outside click closes the menu AND reaches the underlying button.
    window.handle_event(&press(350.0, 315.0));
    assert_eq!(window.menu().unwrap().open_entry(), None);
    assert_eq!(*log.lock(), vec![99]);
    window.handle_event(&release(350.0, 315.0));

    // Element click fires its signal and closes the entry.
    window.handle_event(&press(10.0, 10.0));
    window.handle_event(&release(10.0, 10.0));
    window.handle_event(&press(10.0, 35.0));
    assert_eq!(*activated.lock(), 1);
    assert_eq!(window.menu().unwrap().open_entry(), None);
}

#[test]
fn layout_children_stay_dispatchable_after_build() {
    let mut window = window();
    let row = window
        .register(
            Layout::new(LayoutKind::Horizontal, Rect::new(0.0, 100.0, 300.0, 60.0))
                .with_padding(10.0)
                .with_margin(5.0),
        )
        .unwrap();

    let (log, push) = counter();
    let mut ids = Vec::new();
    for i in 0..3 {
        let id = window
            .add_layout_child(row, Button::new(format!("b{i}"), Rect::new(0.0, 0.0, 80.0, 30.0)))
            .unwrap();
        let push = push.clone();
        window
            .registry()
            .button(id)
            .unwrap()
            .clicked
            .connect(move |_| push(i));
        ids.push(id);
    }
    window.build_layout(row).unwrap();

    // Second button occupies x = 95..175 at y = 105..155.
    window.handle_event(&press(100.0, 110.0));
    assert_eq!(*log.lock(), vec![1]);

    let rect = window.registry().widget(ids[0]).unwrap().core().rect();
    assert_eq!(rect.origin, Point::new(5.0, 105.0));
}
