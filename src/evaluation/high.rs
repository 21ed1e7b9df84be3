use super::table::RankTable;
use crate::RankValue;
use crate::cards::hand::Hand;
use crate::cards::hands::SubsetIterator;
use crate::error::Error;

/// strongest five-card subset of a hand of five or more cards
pub fn best_of(table: &RankTable, hand: Hand) -> RankValue {
    assert!(hand.size() >= 5);
    SubsetIterator::from((5, hand))
        .map(|five| table.rank(five))
        .min()
        .expect("five or more cards yield a combination")
}

/// strongest hand using exactly two hole cards and exactly three
/// board cards, the Omaha constraint. holes of four or five cards
/// give 6 or 10 hole pairs against up to 10 board triples.
pub fn best_omaha(table: &RankTable, hole: Hand, board: Hand) -> RankValue {
    assert!(hole.size() == 4 || hole.size() == 5);
    assert!(board.size() >= 3);
    SubsetIterator::from((2, hole))
        .flat_map(|two| SubsetIterator::from((3, board)).map(move |three| Hand::add(two, three)))
        .map(|five| table.rank(five))
        .min()
        .expect("hole pairs and board triples yield a combination")
}

/// strongest hand using any two hole cards alongside the full board
fn best_spread(table: &RankTable, hole: Hand, board: Hand) -> RankValue {
    assert!(hole.size() >= 2);
    assert!(board.size() >= 3);
    SubsetIterator::from((2, hole))
        .map(|two| best_of(table, Hand::add(two, board)))
        .min()
        .expect("hole pairs yield a combination")
}

/// showdown value of a hole against a board, dispatched on hole size.
/// two cards play Holdem-style with the best five of the union, four
/// or five play under the Omaha constraint, and anything else falls
/// back to spreading two hole cards over the full board.
pub fn strength_of(table: &RankTable, hole: Hand, board: Hand) -> RankValue {
    match hole.size() {
        4 | 5 => best_omaha(table, hole, board),
        2 => best_of(table, Hand::add(hole, board)),
        _ => best_spread(table, hole, board),
    }
}

/// rank a hand supplied as raw card encodings. five cards rank
/// directly, more than five rank as their best five-card subset.
pub fn evaluate_high(cards: &[u8]) -> Result<RankValue, Error> {
    let hand = Hand::try_from(cards)?;
    match hand.size() {
        0..5 => Err(Error::InsufficientDeck {
            need: 5,
            have: hand.size(),
        }),
        _ => Ok(best_of(RankTable::shared(), hand)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_of_finds_the_hidden_straight() {
        let table = RankTable::shared();
        let seven = Hand::from("As Ah 5d 6c 7s 8h 9d");
        let straight = Hand::from("5d 6c 7s 8h 9d");
        assert!(best_of(table, seven) == table.rank(straight));
    }

    #[test]
    fn omaha_needs_two_from_the_hole() {
        let table = RankTable::shared();
        // four board spades, one in the hole. holdem-style play makes
        // an ace-high flush, but omaha must use two hole cards and
        // only one is a spade.
        let hole = Hand::from("As 4d 5d 6d");
        let board = Hand::from("2s 7s 9s Ts 3h");
        let spread = best_of(table, Hand::add(hole, board));
        let omaha = best_omaha(table, hole, board);
        let flush = Hand::from("As 2s 7s 9s Ts");
        assert!(spread == table.rank(flush));
        assert!(omaha > spread);
    }

    #[test]
    fn omaha_uses_exactly_three_from_the_board() {
        let table = RankTable::shared();
        // the board plays a straight by itself, but five board cards
        // are not a legal omaha hand. the hole must contribute two.
        let hole = Hand::from("2s 2h Kd Qc");
        let board = Hand::from("5d 6c 7s 8h 9d");
        let board_straight = table.rank(board);
        assert!(best_omaha(table, hole, board) > board_straight);
    }

    #[test]
    fn dispatch_follows_hole_size() {
        let table = RankTable::shared();
        let board = Hand::from("2c 7d Ts 3h 9s");
        let holdem = Hand::from("As Ac");
        let omaha = Hand::from("As Ac Kh Qd");
        let third = Hand::from("As Ac Kh");
        assert!(strength_of(table, holdem, board) == best_of(table, Hand::add(holdem, board)));
        assert!(strength_of(table, omaha, board) == best_omaha(table, omaha, board));
        assert!(strength_of(table, third, board) == best_spread(table, third, board));
    }

    #[test]
    fn raw_cards_rank_like_hands() {
        // 0 2c, 13 5d, 26 8h, 39 Js, 51 As
        let cards = [0u8, 13, 26, 39, 51];
        let hand = Hand::try_from(&cards[..]).unwrap();
        assert!(evaluate_high(&cards).unwrap() == RankTable::shared().rank(hand));
    }

    #[test]
    fn raw_cards_are_validated() {
        assert!(matches!(
            evaluate_high(&[0, 1, 2, 3, 52]),
            Err(Error::InvalidCard(52))
        ));
        assert!(matches!(
            evaluate_high(&[0, 1, 2, 3, 3]),
            Err(Error::DuplicateCards(_))
        ));
        assert!(matches!(
            evaluate_high(&[0, 1, 2, 3]),
            Err(Error::InsufficientDeck { need: 5, have: 4 })
        ));
    }
}
