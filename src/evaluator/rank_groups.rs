use crate::cards::{Card, Rank};

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: KKK55 groups as [(King, 3), (Five, 2)]; A5542 as
/// [(Five, 2), (Ace, 1), (Four, 1), (Two, 1)].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Build the groups for a set of cards.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.numeric_rank() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = counts[rank.value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Number of distinct ranks.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// True if some rank appears exactly `count` times.
    pub fn has_count(&self, count: u8) -> bool {
        self.groups.iter().any(|(_, c)| *c == count)
    }

    /// Rank of the largest group (highest rank wins among equal sizes).
    pub fn largest(&self) -> Option<Rank> {
        self.groups.first().map(|(rank, _)| *rank)
    }

    /// Rank of the smallest group (lowest rank among equal sizes).
    pub fn smallest(&self) -> Option<Rank> {
        self.groups.last().map(|(rank, _)| *rank)
    }

    /// Ranks appearing exactly `count` times, in descending rank order.
    pub fn ranks_with_count(&self, count: u8) -> Vec<Rank> {
        let mut ranks: Vec<Rank> =
            self.groups.iter().filter(|(_, c)| *c == count).map(|(rank, _)| *rank).collect();
        ranks.sort_by(|a, b| b.cmp(a));
        ranks
    }

    /// Ranks appearing at least twice, in descending rank order regardless of size.
    pub fn matched(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> =
            self.groups.iter().filter(|(_, c)| *c >= 2).map(|(rank, _)| *rank).collect();
        ranks.sort_by(|a, b| b.cmp(a));
        ranks
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
