//! Crawl frontier: the visited set and the explicit work list
//!
//! The frontier replaces call-stack recursion with a `VecDeque` of pending URLs.
//! Depth-first order pushes a page's links to the front in reverse, so they are
//! popped in document order and each one's subtree is drained before the next
//! sibling. Breadth-first order appends to the back.
//!
//! The visited check happens when a URL is taken for processing, not when it is
//! scheduled. That reproduces recursive pre-order exactly: a link that was
//! reached through an earlier sibling's subtree is skipped when popped.

use crate::config::TraversalOrder;
use std::collections::{HashSet, VecDeque};
use url::Url;

/// Pending URLs plus the set of URLs already taken for processing
#[derive(Debug)]
pub struct Frontier {
    /// URLs waiting to be processed
    pending: VecDeque<Url>,

    /// Normalized URLs that have been marked visited
    visited: HashSet<String>,

    /// Traversal policy
    order: TraversalOrder,
}

impl Frontier {
    /// Creates an empty frontier with the given traversal order
    pub fn new(order: TraversalOrder) -> Self {
        Self {
            pending: VecDeque::new(),
            visited: HashSet::new(),
            order,
        }
    }

    /// Schedules the links discovered on one page
    ///
    /// Links already visited are dropped immediately. Links that are merely
    /// pending are scheduled again; the duplicate is skipped when popped.
    pub fn schedule(&mut self, links: Vec<Url>) {
        let visited = &self.visited;
        let fresh = links
            .into_iter()
            .filter(|url| !visited.contains(url.as_str()));

        match self.order {
            TraversalOrder::DepthFirst => {
                let fresh: Vec<Url> = fresh.collect();
                for url in fresh.into_iter().rev() {
                    self.pending.push_front(url);
                }
            }
            TraversalOrder::BreadthFirst => self.pending.extend(fresh),
        }
    }

    /// Pops the next pending URL that has not been visited yet
    ///
    /// The returned URL is not marked; the caller marks it with
    /// [`Frontier::mark_visited`] before fetching.
    pub fn next_pending(&mut self) -> Option<Url> {
        while let Some(url) = self.pending.pop_front() {
            if !self.is_visited(&url) {
                return Some(url);
            }
            tracing::trace!("Skipping already visited URL {}", url);
        }
        None
    }

    /// Marks a URL as visited
    ///
    /// Returns false if it was already in the visited set.
    pub fn mark_visited(&mut self, url: &Url) -> bool {
        self.visited.insert(url.as_str().to_string())
    }

    /// Returns true if the URL has been marked visited
    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url.as_str())
    }

    /// Returns the number of unique URLs visited so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Returns the number of URLs waiting in the work list
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns the traversal order in use
    pub fn order(&self) -> TraversalOrder {
        self.order
    }
}
