use drone_defense::feed::*;

#[test]
fn no_feed_never_yields_a_frame() {
    let mut feed = NoFeed;
    for _ in 0..10 {
        assert!(feed.read().is_none());
    }
}

#[test]
fn noise_feed_yields_full_thumbnails() {
    let mut feed = NoiseFeed::new(1);
    let t = feed.read().unwrap();
    assert_eq!(t.cols, THUMB_COLS);
    assert_eq!(t.rows, THUMB_ROWS);
    assert_eq!(t.luma.len(), THUMB_COLS * THUMB_ROWS);
}

#[test]
fn noise_feed_is_seeded() {
    let mut a = NoiseFeed::new(9);
    let mut b = NoiseFeed::new(9);
    assert_eq!(a.read(), b.read());
}

#[test]
fn thumbnail_indexing_is_row_major() {
    let t = Thumbnail {
        cols: 3,
        rows: 2,
        luma: vec![0, 1, 2, 3, 4, 5],
    };
    assert_eq!(t.at(0, 0), 0);
    assert_eq!(t.at(2, 0), 2);
    assert_eq!(t.at(0, 1), 3);
    assert_eq!(t.at(2, 1), 5);
}
