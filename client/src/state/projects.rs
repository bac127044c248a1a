//! Project category filter.
//!
//! DESIGN
//! ======
//! Visibility is a pure function of (card category, selected category). What
//! needs state is the exit transition: a card leaving the filter spends
//! [`crate::consts::FILTER_EXIT_MS`] in [`CardPhase::Exiting`] before it is
//! hidden. Each exit carries a fresh token, and [`FilterState::finish_exit`]
//! only hides a card whose phase still holds that token, so re-selecting the
//! card's category during the delay cancels the hide.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// Project categories, including the `All` wildcard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Web,
    Mobile,
    Design,
}

impl Category {
    /// Every category, in filter-button order.
    pub const EVERY: [Self; 4] = [Self::All, Self::Web, Self::Mobile, Self::Design];

    /// Tag used in `data-category` / `data-filter` attributes.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Design => "design",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Web => "Web",
            Self::Mobile => "Mobile",
            Self::Design => "Design",
        }
    }

    #[cfg(test)]
    pub(crate) fn from_tag(tag: &str) -> Option<Self> {
        Self::EVERY.into_iter().find(|c| c.tag() == tag)
    }
}

/// Whether a card of `card` category shows under the `selected` filter.
#[must_use]
pub fn matches_filter(card: Category, selected: Category) -> bool {
    selected == Category::All || card == selected
}

/// Layout phase of one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPhase {
    Shown,
    /// Playing the exit transition; hidden once the matching ticket fires.
    Exiting { token: u64 },
    Hidden,
}

impl CardPhase {
    /// CSS classes for the card element in this phase.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Shown => "project-card",
            Self::Exiting { .. } => "project-card filtering-out",
            Self::Hidden => "project-card hidden",
        }
    }
}

/// Handle for a pending exit; redeem with [`FilterState::finish_exit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExitTicket {
    pub index: usize,
    pub token: u64,
}

/// Transitions started by one [`FilterState::select`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Cards that began exiting; each needs a timer.
    pub exiting: Vec<ExitTicket>,
    /// Cards whose pending exit was cancelled; drop their timers.
    pub cancelled: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Card {
    category: Category,
    phase: CardPhase,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    selected: Category,
    cards: Vec<Card>,
    next_token: u64,
}

impl FilterState {
    /// Start with every card shown under the `All` filter.
    #[must_use]
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        let cards = categories
            .into_iter()
            .map(|category| Card { category, phase: CardPhase::Shown })
            .collect();
        Self { selected: Category::All, cards, next_token: 0 }
    }

    #[must_use]
    pub fn selected(&self) -> Category {
        self.selected
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn phase(&self, index: usize) -> Option<CardPhase> {
        self.cards.get(index).map(|card| card.phase)
    }

    /// Indices of cards that occupy layout (shown or still exiting).
    #[must_use]
    pub fn in_layout(&self) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.phase != CardPhase::Hidden)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of cards that match the current filter.
    #[cfg(test)]
    pub(crate) fn matching(&self) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| matches_filter(card.category, self.selected))
            .map(|(i, _)| i)
            .collect()
    }

    /// Select a category and start the resulting transitions.
    pub fn select(&mut self, category: Category) -> Selection {
        self.selected = category;
        let mut selection = Selection::default();
        for (index, card) in self.cards.iter_mut().enumerate() {
            let visible = matches_filter(card.category, category);
            match (visible, card.phase) {
                (true, CardPhase::Exiting { .. }) => {
                    card.phase = CardPhase::Shown;
                    selection.cancelled.push(index);
                }
                (true, CardPhase::Hidden) => card.phase = CardPhase::Shown,
                (false, CardPhase::Shown) => {
                    self.next_token += 1;
                    let token = self.next_token;
                    card.phase = CardPhase::Exiting { token };
                    selection.exiting.push(ExitTicket { index, token });
                }
                _ => {}
            }
        }
        selection
    }

    /// Complete an exit transition.
    ///
    /// Returns `false` without changing anything when the card has since been
    /// re-shown or restarted its exit under a newer ticket.
    pub fn finish_exit(&mut self, ticket: ExitTicket) -> bool {
        let Some(card) = self.cards.get_mut(ticket.index) else {
            return false;
        };
        if card.phase != (CardPhase::Exiting { token: ticket.token }) {
            return false;
        }
        card.phase = CardPhase::Hidden;
        true
    }
}
