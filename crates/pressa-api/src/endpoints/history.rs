// Shot history endpoints

use serde::Serialize;
use uuid::Uuid;

use crate::client::MachineClient;
use crate::error::Error;
use crate::models::{
    HistoryEntry, HistoryListingEntry, HistoryQuery, HistoryStats, Rating, ShotRating,
};

impl MachineClient {
    /// Enumerate recorded shots without their sample traces.
    ///
    /// `GET /api/{v}/history`
    pub async fn get_history(&self) -> Result<Vec<HistoryListingEntry>, Error> {
        self.get_json("listing shot history", "history").await
    }

    /// Search recorded shots, sample traces included.
    ///
    /// `POST /api/{v}/history` -- the query object is the JSON body.
    pub async fn search_history(&self, query: &HistoryQuery) -> Result<Vec<HistoryEntry>, Error> {
        self.post_json("searching shot history", "history", query)
            .await
    }

    /// Names of historical profiles matching a free-text query.
    ///
    /// `GET /api/{v}/history/search?query={query}`
    pub async fn search_historical_profiles(&self, query: &str) -> Result<Vec<String>, Error> {
        self.get_json_with_params(
            "searching historical profiles",
            "history/search",
            &[("query", query.to_owned())],
        )
        .await
    }

    /// The shot currently being brewed, if any.
    ///
    /// `GET /api/{v}/history/current`
    pub async fn get_current_shot(&self) -> Result<Option<HistoryEntry>, Error> {
        self.get_json("fetching current shot", "history/current")
            .await
    }

    /// The most recently completed shot, if any.
    ///
    /// `GET /api/{v}/history/last`
    pub async fn get_last_shot(&self) -> Result<Option<HistoryEntry>, Error> {
        self.get_json("fetching last shot", "history/last").await
    }

    /// Aggregate brewing statistics.
    ///
    /// `GET /api/{v}/history/stats`
    pub async fn get_history_statistics(&self) -> Result<HistoryStats, Error> {
        self.get_json("fetching history statistics", "history/stats")
            .await
    }

    /// Rate a recorded shot.
    ///
    /// `POST /api/{v}/history/rating/{shot_id}`
    pub async fn rate_shot(&self, shot_id: Uuid, rating: Rating) -> Result<(), Error> {
        #[derive(Serialize)]
        struct Body {
            rating: Rating,
        }

        self.post_empty(
            "rating shot",
            &format!("history/rating/{shot_id}"),
            &Body { rating },
        )
        .await
    }

    /// The stored rating for a recorded shot.
    ///
    /// `GET /api/{v}/history/rating/{shot_id}`
    pub async fn get_shot_rating(&self, shot_id: Uuid) -> Result<ShotRating, Error> {
        self.get_json("fetching shot rating", &format!("history/rating/{shot_id}"))
            .await
    }
}
