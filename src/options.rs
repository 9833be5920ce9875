//! Round configuration options.

/// Order in which the initial four cards are dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DealOrder {
    /// Player receives two cards, then the dealer receives two.
    #[default]
    PlayerFirst,
    /// Dealer receives two cards, then the player receives two.
    DealerFirst,
    /// One card at a time: player, dealer, player, dealer.
    Alternating,
}

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::{DealOrder, RoundOptions};
///
/// let options = RoundOptions::default()
///     .with_deal_order(DealOrder::Alternating)
///     .with_stand_on_soft_17(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoundOptions {
    /// Order of the initial deal.
    pub deal_order: DealOrder,
    /// Whether dealer stands on soft 17. The default hits soft 17.
    pub stand_on_soft_17: bool,
}

impl RoundOptions {
    /// Sets the order of the initial deal.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{DealOrder, RoundOptions};
    ///
    /// let options = RoundOptions::default().with_deal_order(DealOrder::DealerFirst);
    /// assert_eq!(options.deal_order, DealOrder::DealerFirst);
    /// ```
    #[must_use]
    pub const fn with_deal_order(mut self, order: DealOrder) -> Self {
        self.deal_order = order;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_stand_on_soft_17(true);
    /// assert_eq!(options.stand_on_soft_17, true);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }
}
