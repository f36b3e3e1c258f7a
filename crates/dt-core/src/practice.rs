//! Curated practice-question feed.
//!
//! The catalog is static; the only mutable state is the persisted set of
//! completed question ids. Batch selection is deliberately unseeded, so
//! callers (and tests) may only rely on membership, size, and filter
//! properties, never on order.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::entry::{Category, EntryDraft, ValidationError};

/// Maximum number of questions returned per batch.
pub const BATCH_SIZE: usize = 6;

/// Question difficulty tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ValidationError::UnknownDifficulty {
                value: s.to_string(),
            }),
        }
    }
}

/// One question in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub title: &'static str,
    pub difficulty: Difficulty,
    pub topics: &'static [&'static str],
    pub platform: &'static str,
    pub url: &'static str,
}

impl Question {
    /// Builds the entry recorded when this question is marked complete:
    /// a 30-minute DSA session with one problem solved.
    #[must_use]
    pub fn completion_draft(&self, date: NaiveDate) -> EntryDraft {
        EntryDraft {
            title: format!("Solved: {}", self.title),
            category: Category::Dsa,
            time_spent_min: 30,
            problems_solved: 1,
            notes: Some(format!(
                "Completed {} problem on {}. Topics: {}",
                self.difficulty,
                self.platform,
                self.topics.join(", ")
            )),
            date,
        }
    }
}

/// The persisted set of completed question ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedSet(BTreeSet<u32>);

impl CompletedSet {
    /// Marks a question complete. Returns false if it already was;
    /// re-adding a present id is a no-op.
    pub fn insert(&mut self, id: u32) -> bool {
        self.0.insert(id)
    }

    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Picks the next batch of questions to practice.
///
/// Completed ids are excluded, the difficulty filter (if any) is applied
/// exactly, and at most [`BATCH_SIZE`] questions are returned in shuffled
/// order.
pub fn next_batch<'a, R: Rng>(
    catalog: &'a [Question],
    completed: &CompletedSet,
    difficulty: Option<Difficulty>,
    rng: &mut R,
) -> Vec<&'a Question> {
    let mut remaining: Vec<&Question> = catalog
        .iter()
        .filter(|q| !completed.contains(q.id))
        .filter(|q| difficulty.is_none_or(|d| q.difficulty == d))
        .collect();
    remaining.shuffle(rng);
    remaining.truncate(BATCH_SIZE);
    remaining
}

/// Looks a question up by id.
#[must_use]
pub fn find(id: u32) -> Option<&'static Question> {
    CATALOG.iter().find(|q| q.id == id)
}

/// The full static catalog.
#[must_use]
pub const fn catalog() -> &'static [Question] {
    &CATALOG
}

macro_rules! q {
    ($id:expr, $title:expr, $diff:ident, [$($topic:expr),+], $slug:expr) => {
        Question {
            id: $id,
            title: $title,
            difficulty: Difficulty::$diff,
            topics: &[$($topic),+],
            platform: "LeetCode",
            url: concat!("https://leetcode.com/problems/", $slug, "/"),
        }
    };
}

static CATALOG: [Question; 60] = [
    q!(1, "Two Sum", Easy, ["Array", "Hash Map"], "two-sum"),
    q!(2, "Valid Parentheses", Easy, ["Stack", "String"], "valid-parentheses"),
    q!(3, "Merge Two Sorted Lists", Easy, ["Linked List", "Recursion"], "merge-two-sorted-lists"),
    q!(4, "Climbing Stairs", Easy, ["DP", "Math"], "climbing-stairs"),
    q!(5, "Binary Tree Inorder Traversal", Easy, ["Tree", "DFS", "Stack"], "binary-tree-inorder-traversal"),
    q!(6, "Best Time to Buy and Sell Stock", Easy, ["Array", "DP"], "best-time-to-buy-and-sell-stock"),
    q!(7, "Valid Palindrome", Easy, ["String", "Two Pointers"], "valid-palindrome"),
    q!(8, "Linked List Cycle", Easy, ["Linked List", "Two Pointers"], "linked-list-cycle"),
    q!(9, "Reverse Linked List", Easy, ["Linked List", "Recursion"], "reverse-linked-list"),
    q!(10, "Maximum Depth of Binary Tree", Easy, ["Tree", "DFS", "BFS"], "maximum-depth-of-binary-tree"),
    q!(11, "Contains Duplicate", Easy, ["Array", "Hash Map"], "contains-duplicate"),
    q!(12, "Invert Binary Tree", Easy, ["Tree", "DFS", "BFS"], "invert-binary-tree"),
    q!(13, "Roman to Integer", Easy, ["String", "Math"], "roman-to-integer"),
    q!(14, "Single Number", Easy, ["Bit Manipulation", "Array"], "single-number"),
    q!(15, "Move Zeroes", Easy, ["Array", "Two Pointers"], "move-zeroes"),
    q!(16, "Symmetric Tree", Easy, ["Tree", "DFS", "BFS"], "symmetric-tree"),
    q!(17, "Missing Number", Easy, ["Array", "Bit Manipulation"], "missing-number"),
    q!(18, "Palindrome Number", Easy, ["Math"], "palindrome-number"),
    q!(19, "Majority Element", Easy, ["Array", "Sorting", "Hash Map"], "majority-element"),
    q!(20, "Intersection of Two Arrays II", Easy, ["Array", "Hash Map", "Sorting"], "intersection-of-two-arrays-ii"),
    q!(21, "Add Two Numbers", Medium, ["Linked List", "Math"], "add-two-numbers"),
    q!(22, "Longest Substring Without Repeating Characters", Medium, ["String", "Sliding Window"], "longest-substring-without-repeating-characters"),
    q!(23, "Longest Palindromic Substring", Medium, ["String", "DP"], "longest-palindromic-substring"),
    q!(24, "Container With Most Water", Medium, ["Array", "Two Pointers"], "container-with-most-water"),
    q!(25, "3Sum", Medium, ["Array", "Two Pointers", "Sorting"], "3sum"),
    q!(26, "Maximum Subarray", Medium, ["Array", "DP", "Divide and Conquer"], "maximum-subarray"),
    q!(27, "Number of Islands", Medium, ["Graph", "BFS", "DFS"], "number-of-islands"),
    q!(28, "Course Schedule", Medium, ["Graph", "Topological Sort", "BFS"], "course-schedule"),
    q!(29, "Word Break", Medium, ["DP", "Hash Map", "String"], "word-break"),
    q!(30, "Merge Intervals", Medium, ["Array", "Sorting"], "merge-intervals"),
    q!(31, "Edit Distance", Medium, ["String", "DP"], "edit-distance"),
    q!(32, "Group Anagrams", Medium, ["String", "Hash Map", "Sorting"], "group-anagrams"),
    q!(33, "Product of Array Except Self", Medium, ["Array", "Prefix Sum"], "product-of-array-except-self"),
    q!(34, "Top K Frequent Elements", Medium, ["Array", "Hash Map", "Heap"], "top-k-frequent-elements"),
    q!(35, "Validate Binary Search Tree", Medium, ["Tree", "DFS", "BST"], "validate-binary-search-tree"),
    q!(36, "Binary Tree Level Order Traversal", Medium, ["Tree", "BFS"], "binary-tree-level-order-traversal"),
    q!(37, "Coin Change", Medium, ["DP", "BFS"], "coin-change"),
    q!(38, "Rotate Image", Medium, ["Array", "Matrix", "Math"], "rotate-image"),
    q!(39, "Search in Rotated Sorted Array", Medium, ["Array", "Binary Search"], "search-in-rotated-sorted-array"),
    q!(40, "Letter Combinations of a Phone Number", Medium, ["String", "Backtracking"], "letter-combinations-of-a-phone-number"),
    q!(41, "Subsets", Medium, ["Array", "Backtracking"], "subsets"),
    q!(42, "Permutations", Medium, ["Array", "Backtracking"], "permutations"),
    q!(43, "Kth Smallest Element in a BST", Medium, ["Tree", "DFS", "BST"], "kth-smallest-element-in-a-bst"),
    q!(44, "Lowest Common Ancestor of a Binary Tree", Medium, ["Tree", "DFS"], "lowest-common-ancestor-of-a-binary-tree"),
    q!(45, "Decode Ways", Medium, ["String", "DP"], "decode-ways"),
    q!(46, "Unique Paths", Medium, ["DP", "Math"], "unique-paths"),
    q!(47, "House Robber", Medium, ["Array", "DP"], "house-robber"),
    q!(48, "Set Matrix Zeroes", Medium, ["Array", "Matrix"], "set-matrix-zeroes"),
    q!(49, "Spiral Matrix", Medium, ["Array", "Matrix"], "spiral-matrix"),
    q!(50, "Clone Graph", Medium, ["Graph", "BFS", "DFS"], "clone-graph"),
    q!(51, "Median of Two Sorted Arrays", Hard, ["Array", "Binary Search"], "median-of-two-sorted-arrays"),
    q!(52, "Trapping Rain Water", Hard, ["Array", "Two Pointers", "Stack"], "trapping-rain-water"),
    q!(53, "Serialize and Deserialize Binary Tree", Hard, ["Tree", "DFS", "BFS", "Design"], "serialize-and-deserialize-binary-tree"),
    q!(54, "Minimum Window Substring", Hard, ["String", "Sliding Window", "Hash Map"], "minimum-window-substring"),
    q!(55, "Word Ladder", Hard, ["String", "BFS", "Hash Map"], "word-ladder"),
    q!(56, "Merge k Sorted Lists", Hard, ["Linked List", "Heap", "Divide and Conquer"], "merge-k-sorted-lists"),
    q!(57, "Largest Rectangle in Histogram", Hard, ["Array", "Stack", "Monotonic Stack"], "largest-rectangle-in-histogram"),
    q!(58, "Regular Expression Matching", Hard, ["String", "DP", "Recursion"], "regular-expression-matching"),
    q!(59, "LRU Cache", Hard, ["Hash Map", "Linked List", "Design"], "lru-cache"),
    q!(60, "Alien Dictionary", Hard, ["Graph", "Topological Sort", "BFS"], "alien-dictionary"),
];
