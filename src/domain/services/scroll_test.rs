use super::Scroll;

#[test]
fn it_stays_at_the_top_when_content_fits() {
    let mut scroll = Scroll::default();
    scroll.set_state(5, 20);
    scroll.down();
    scroll.last();

    assert_eq!(scroll.position, 0);
}

#[test]
fn it_clamps_to_the_last_page() {
    let mut scroll = Scroll::default();
    scroll.set_state(30, 10);
    scroll.down_page();
    scroll.down_page();
    scroll.down_page();

    assert_eq!(scroll.position, 20);

    scroll.up();
    assert_eq!(scroll.position, 19);

    scroll.up_page();
    scroll.up_page();
    assert_eq!(scroll.position, 0);
}

#[test]
fn it_jumps_to_the_newest_line() {
    let mut scroll = Scroll::default();
    scroll.set_state(42, 12);
    scroll.last();

    assert_eq!(scroll.position, 30);
}

#[test]
fn it_pulls_back_when_content_shrinks() {
    let mut scroll = Scroll::default();
    scroll.set_state(42, 12);
    scroll.last();
    scroll.set_state(42, 40);

    assert_eq!(scroll.position, 2);
}
