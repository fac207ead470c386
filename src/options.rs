//! Game configuration options.

/// Fewest players a game accepts.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game accepts.
pub const MAX_PLAYERS: usize = 4;

/// Seed used for shuffling unless overridden.
pub const DEFAULT_SEED: u64 = 1234;

/// Cards dealt to each player unless overridden.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Configuration options for an UNO game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use unors::GameOptions;
///
/// let options = GameOptions::default()
///     .with_seed(42)
///     .with_hand_size(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Seed for the deck shuffle. The same seed always yields the same deal.
    pub seed: u64,
    /// Number of cards dealt to each player.
    pub hand_size: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}

impl GameOptions {
    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::GameOptions;
    ///
    /// let options = GameOptions::default().with_seed(7);
    /// assert_eq!(options.seed, 7);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(3);
    /// assert_eq!(options.hand_size, 3);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }
}
