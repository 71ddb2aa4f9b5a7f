use crate::device_display::impl_console::DeviceDisplayConsole;
use crate::device_display::interface::DeviceDisplay;
use crate::hand_detector::impl_fake::open_hand;
use crate::landmark::{Hand, HandSet};

#[test]
fn test_render_writes_label_and_hand_count() {
    let mut display = DeviceDisplayConsole::new();
    display.init().unwrap();

    let hands = HandSet::new(vec![Hand::new(open_hand(0.5, 0.5))]);
    display.render(&hands, Some("hello")).unwrap();

    assert_eq!(display.line(0), "hello");
    assert_eq!(display.line(1), "hands: 1");
}

#[test]
fn test_render_prints_only_on_change() {
    let mut display = DeviceDisplayConsole::new();
    display.init().unwrap();

    display.render(&HandSet::empty(), None).unwrap();
    display.render(&HandSet::empty(), None).unwrap();
    display.render(&HandSet::empty(), Some("yes")).unwrap();

    assert_eq!(display.rendered(), 3);
}

#[test]
fn test_long_labels_are_truncated() {
    let mut display = DeviceDisplayConsole::new();

    display
        .render(&HandSet::empty(), Some("a very long gesture label"))
        .unwrap();

    assert_eq!(display.line(0), "a very long gest");
}
