//! Word cloud pipeline over fixture text

use msgcloud::cloud::{
    layout, render_svg, FrequencyOptions, LayoutOptions, MonospaceMetrics, StopwordSet, WordCloud,
};

use crate::helpers::load_fixture;

fn english_cloud() -> WordCloud {
    WordCloud::new(&StopwordSet::english().unwrap(), FrequencyOptions::default()).unwrap()
}

#[test]
fn normalization_matches_documented_example() {
    let cloud = WordCloud::new(&StopwordSet::new(["the", "and"]), FrequencyOptions::default())
        .unwrap();

    assert_eq!(
        cloud.normalize("Check this out http://x.co/y and also the"),
        "check this out "
    );
}

#[test]
fn normalizing_twice_changes_nothing() {
    let cloud = english_cloud();
    let once = cloud.normalize(&load_fixture("notes.txt"));
    assert_eq!(cloud.normalize(&once), once);
}

#[test]
fn most_frequent_word_in_notes() {
    let words = english_cloud().frequencies(&load_fixture("notes.txt")).unwrap();

    assert_eq!(words[0].word, "pizza");
    assert_eq!(words[0].count, 4);
    assert!(words.iter().all(|w| w.word != "the" && w.word != "https"));
}

#[test]
fn link_text_does_not_reach_the_cloud() {
    let words = english_cloud().frequencies(&load_fixture("notes.txt")).unwrap();
    assert!(words.iter().all(|w| w.word != "friday" && w.word != "example"));
}

#[test]
fn svg_contains_top_word() {
    let words = english_cloud().frequencies(&load_fixture("notes.txt")).unwrap();
    let cloud = layout(&words, &MonospaceMetrics::default(), &LayoutOptions::default());
    let svg = render_svg(&cloud);

    assert!(svg.contains(">pizza</text>"));
    assert_eq!(svg.matches("<text").count(), cloud.words.len());
}
