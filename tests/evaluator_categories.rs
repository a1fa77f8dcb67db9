use poker_showdown::evaluator::Category;
use poker_showdown::hand::PokerHand;

fn hand(tokens: [&str; 5]) -> PokerHand {
    PokerHand::try_new("P", &tokens).unwrap()
}

fn assert_hand(tokens: [&str; 5], category: Category, description: &str) {
    let h = hand(tokens);
    assert_eq!(h.category(), category, "{tokens:?}");
    assert_eq!(h.description(), description, "{tokens:?}");
}

#[test]
fn category_high_card() {
    assert_hand(["2H", "3D", "5S", "9C", "KD"], Category::HighCard, "High card");
    assert_eq!(hand(["2H", "3D", "5S", "9C", "KD"]).category().code(), 1);
}

#[test]
fn category_one_pair() {
    assert_hand(["2H", "2D", "5S", "9C", "KD"], Category::OnePair, "One pair of 2s");
    assert_hand(["QH", "QD", "5S", "9C", "KD"], Category::OnePair, "One pair of Queens");
}

#[test]
fn category_two_pair() {
    assert_hand(["2H", "2D", "KS", "KC", "9D"], Category::TwoPair, "Two pair, Kings and 2s");
}

#[test]
fn category_three_of_a_kind() {
    assert_hand(["7H", "7D", "7S", "2C", "KD"], Category::ThreeOfAKind, "Three of a kind, 7s");
}

#[test]
fn category_straight() {
    assert_hand(["6H", "7D", "8S", "9C", "10D"], Category::Straight, "Straight");
    assert_hand(["10H", "JD", "QS", "KC", "AD"], Category::Straight, "Straight");
}

#[test]
fn wheel_is_not_a_straight() {
    assert_hand(["AH", "2D", "3S", "4C", "5D"], Category::HighCard, "High card");
}

#[test]
fn category_flush() {
    assert_hand(["2H", "5H", "7H", "9H", "KH"], Category::Flush, "Flush");
}

#[test]
fn category_full_house() {
    let h = hand(["2H", "2D", "2S", "5C", "5D"]);
    assert_eq!(h.category(), Category::FullHouse);
    assert_eq!(h.category().code(), 7);
    assert_eq!(h.description(), "Full house, 2s over 5s");
    assert_hand(["KH", "KD", "KS", "5C", "5D"], Category::FullHouse, "Full house, Kings over 5s");
}

#[test]
fn category_four_of_a_kind() {
    assert_hand(["9C", "9D", "9H", "9S", "AC"], Category::FourOfAKind, "Four of a kind, 9s");
}

#[test]
fn category_straight_flush() {
    assert_hand(
        ["10S", "JS", "QS", "KS", "AS"],
        Category::StraightFlush,
        "Straight flush, Ace-high",
    );
    assert_eq!(hand(["10S", "JS", "QS", "KS", "AS"]).category().code(), 9);
}

#[test]
fn cards_are_sorted_by_descending_rank() {
    let h = hand(["2H", "KD", "5S", "10C", "9D"]);
    assert_eq!(h.cards_text(), "KD, 10C, 9D, 5S, 2H");
    assert_eq!(h.to_string(), "P: KD, 10C, 9D, 5S, 2H");
}

#[test]
fn lowercase_tokens_are_normalized() {
    let h = hand([" 10h", "jd ", "qs", "kc", "ad"]);
    assert_eq!(h.category(), Category::Straight);
    assert_eq!(h.cards_text(), "AD, KC, QS, JD, 10H");
}

#[test]
fn titles_cover_every_category() {
    let titles: Vec<&str> = Category::ALL.iter().map(|c| c.title()).collect();
    assert_eq!(
        titles,
        [
            "High Card",
            "One Pair",
            "Two Pair",
            "Three of a Kind",
            "Straight",
            "Flush",
            "Full House",
            "Four of a Kind",
            "Straight Flush",
        ]
    );
}
