use super::list::StringQueue;

/// How [`Queue::sort`](super::traits::Queue::sort) walks the chain.
///
/// Both strategies are stable merge sorts and produce the same order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortStrategy {
    /// Split at the midpoint, sort both halves recursively and merge.
    /// Recursion depth grows with the logarithm of the queue size.
    #[default]
    Recursive,
    /// Merge runs of width 1, 2, 4, ... in passes over the chain, without
    /// recursion.
    BottomUp,
}

/// Settings for a [`StringQueue`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueConfig {
    pub sort_strategy: SortStrategy,
}

impl QueueConfig {
    pub(crate) const DEFAULT: Self = Self {
        sort_strategy: SortStrategy::Recursive,
    };
}

/// Builder for a [`StringQueue`].
#[derive(Debug, Default)]
pub struct QueueBuilder {
    config: QueueConfig,
}

impl QueueBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: QueueConfig::DEFAULT,
        }
    }

    /// Set the sort strategy.
    ///
    /// # Arguments
    /// * `strategy` - The strategy used by `sort`
    ///
    /// # Returns
    /// The builder instance for method chaining
    pub fn with_sort_strategy(mut self, strategy: SortStrategy) -> Self {
        self.config.sort_strategy = strategy;
        self
    }

    /// Build an empty queue with the configured settings.
    pub fn build(self) -> StringQueue {
        StringQueue::with_config(self.config)
    }
}
