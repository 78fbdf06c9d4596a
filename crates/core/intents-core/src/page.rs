//! Pagination types shared by the repository, service and REST layers

use crate::error::{IntentsError, IntentsResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl Direction {
    fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }
}

/// One sort criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    /// Property name
    pub property: String,
    /// Direction
    pub direction: Direction,
}

impl SortOrder {
    /// Ascending order on `property`
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Asc,
        }
    }

    /// Descending order on `property`
    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Desc,
        }
    }

    /// Parse one `sort` query value: `prop[,prop...][,asc|desc]`.
    ///
    /// A trailing direction applies to every property in the value.
    pub fn parse(value: &str) -> IntentsResult<Vec<SortOrder>> {
        let mut parts: Vec<&str> = value
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let direction = match parts.last().and_then(|last| Direction::parse(last)) {
            Some(direction) => {
                parts.pop();
                direction
            }
            None => Direction::Asc,
        };

        if parts.is_empty() {
            return Err(IntentsError::validation(
                "badquery",
                format!("Sort value '{value}' names no property"),
            ));
        }

        Ok(parts
            .into_iter()
            .map(|property| SortOrder {
                property: property.to_string(),
                direction,
            })
            .collect())
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        };
        write!(f, "{},{}", self.property, direction)
    }
}

/// Which slice of the collection to return
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u32,
    /// Page size, always at least 1
    pub size: u32,
    /// Sort criteria, applied in order
    #[serde(default)]
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    /// Create an unsorted page request. A zero size is rejected.
    pub fn new(page: u32, size: u32) -> IntentsResult<Self> {
        if size == 0 {
            return Err(IntentsError::validation(
                "badquery",
                "Page size must not be less than one",
            ));
        }
        Ok(Self {
            page,
            size,
            sort: Vec::new(),
        })
    }

    /// Replace the sort criteria
    #[must_use]
    pub fn with_sort(mut self, sort: Vec<SortOrder>) -> Self {
        self.sort = sort;
        self
    }

    /// Index of the first element of this page
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: 20,
            sort: Vec::new(),
        }
    }
}

/// A bounded slice of the full result set plus total-count metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Elements of this page
    pub content: Vec<T>,
    /// Zero-based page index
    pub number: u32,
    /// Requested page size
    pub size: u32,
    /// Number of elements across all pages
    pub total_elements: u64,
}

impl<T> Page<T> {
    /// Create a page for `request`
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
        }
    }

    /// Number of pages needed to hold `total_elements`
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 1;
        }
        self.total_elements.div_ceil(u64::from(self.size))
    }

    /// Whether a page follows this one
    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.number) + 1 < self.total_pages()
    }

    /// Whether a page precedes this one
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    /// Transform every element, keeping the paging metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
