//! Resolution of movie listing parameters into a single query shape.
//!
//! A movie listing is either filtered by director and/or genre, or paginated.
//! The two are mutually exclusive: as soon as any filter is present, `limit`
//! and `start` are ignored and the full matching set is returned. A filter id
//! of `0` counts as absent.

use serde::Deserialize;

use crate::types::DbId;

/// Page size used when `limit` is not supplied.
pub const DEFAULT_PAGE_LIMIT: i64 = 5;

/// Raw query parameters accepted by `GET /movies/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieListQuery {
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
    pub limit: Option<i64>,
    /// Offset of the first movie in the page.
    pub start: Option<i64>,
}

/// The query a movie listing runs against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieSelection {
    /// Conjunctive filter over the supplied references; unpaginated.
    Filtered {
        director_id: Option<DbId>,
        genre_id: Option<DbId>,
    },
    /// All movies, one page at a time. Values go to SQLite unchanged.
    Page { limit: i64, offset: i64 },
}

impl MovieListQuery {
    pub fn resolve(&self) -> MovieSelection {
        let director_id = self.director_id.filter(|&id| id != 0);
        let genre_id = self.genre_id.filter(|&id| id != 0);

        if director_id.is_some() || genre_id.is_some() {
            MovieSelection::Filtered {
                director_id,
                genre_id,
            }
        } else {
            MovieSelection::Page {
                limit: self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
                offset: self.start.unwrap_or(0),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn no_params_yields_default_page() {
        let selection = MovieListQuery::default().resolve();
        assert_eq!(selection, MovieSelection::Page { limit: 5, offset: 0 });
    }

    #[test]
    fn explicit_limit_and_start_are_used() {
        let query = MovieListQuery {
            limit: Some(2),
            start: Some(4),
            ..Default::default()
        };
        assert_eq!(query.resolve(), MovieSelection::Page { limit: 2, offset: 4 });
    }

    #[test]
    fn director_filter_disables_pagination() {
        let query = MovieListQuery {
            director_id: Some(3),
            limit: Some(1),
            start: Some(10),
            ..Default::default()
        };
        assert_eq!(
            query.resolve(),
            MovieSelection::Filtered {
                director_id: Some(3),
                genre_id: None,
            }
        );
    }

    #[test]
    fn genre_filter_alone() {
        let query = MovieListQuery {
            genre_id: Some(8),
            ..Default::default()
        };
        assert_matches!(
            query.resolve(),
            MovieSelection::Filtered {
                director_id: None,
                genre_id: Some(8)
            }
        );
    }

    #[test]
    fn both_filters_are_combined() {
        let query = MovieListQuery {
            director_id: Some(1),
            genre_id: Some(2),
            ..Default::default()
        };
        assert_matches!(
            query.resolve(),
            MovieSelection::Filtered {
                director_id: Some(1),
                genre_id: Some(2)
            }
        );
    }

    #[test]
    fn page_values_pass_through_unchanged() {
        let query = MovieListQuery {
            limit: Some(1_000),
            start: Some(-1),
            ..Default::default()
        };
        assert_eq!(
            query.resolve(),
            MovieSelection::Page {
                limit: 1_000,
                offset: -1
            }
        );

        let zero = MovieListQuery {
            limit: Some(0),
            ..Default::default()
        };
        assert_eq!(zero.resolve(), MovieSelection::Page { limit: 0, offset: 0 });
    }

    #[test]
    fn zero_director_id_falls_back_to_page() {
        let query = MovieListQuery {
            director_id: Some(0),
            limit: Some(3),
            ..Default::default()
        };
        assert_eq!(query.resolve(), MovieSelection::Page { limit: 3, offset: 0 });
    }

    #[test]
    fn zero_director_id_with_genre_filters_by_genre_only() {
        let query = MovieListQuery {
            director_id: Some(0),
            genre_id: Some(2),
            ..Default::default()
        };
        assert_matches!(
            query.resolve(),
            MovieSelection::Filtered {
                director_id: None,
                genre_id: Some(2)
            }
        );
    }
}
