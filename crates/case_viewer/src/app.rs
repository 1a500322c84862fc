use crate::{
    overlay::{HtmlPage, Overlay},
    scene::{
        self,
        point_cloud::{CASES_PER_MARKER, MAX_MARKERS},
        SceneGraph,
    },
};
use case_feed::{CaseFeed, FeedError, FeedResult, TimeSeries};
use rand::{rngs::StdRng, SeedableRng};

/// Result of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub date: String,
    pub count: u64,
    pub markers: usize,
}

/// Explicit viewer context: scene graph, overlay page and the RNG that
/// scatters the point cloud.
pub struct Viewer {
    pub scene: SceneGraph,
    pub page: HtmlPage,
    pub overlay: Overlay,
    rng: StdRng,
}

impl Viewer {
    pub fn new(width: u32, height: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            scene: SceneGraph::new(width, height),
            page: HtmlPage::new(),
            overlay: Overlay::new(),
            rng,
        }
    }

    /// Fetches the series once and, on success, rebuilds the point cloud and
    /// the overlay from its latest record. On failure nothing is touched.
    pub async fn run(&mut self, feed: &CaseFeed) -> FeedResult<Outcome> {
        let result = match feed.fetch().await {
            Ok(series) => self.apply(&series),
            Err(e) => Err(e),
        };

        match &result {
            Ok(outcome) => tracing::info!(
                date = %outcome.date,
                count = outcome.count,
                markers = outcome.markers,
                "Pipeline succeeded"
            ),
            Err(e) => tracing::error!(kind = e.kind(), error = %e, "Pipeline failed"),
        }
        result
    }

    /// Runs the synchronous half of the pipeline on an already fetched series.
    pub fn apply(&mut self, series: &TimeSeries) -> FeedResult<Outcome> {
        let latest = series.latest()?;
        let count = latest.count();
        if count / CASES_PER_MARKER > MAX_MARKERS {
            tracing::warn!(count, date = %latest.date, "Rejecting implausible case count");
            return Err(FeedError::UnexpectedShape(format!(
                "newCases {count} on {} is out of range",
                latest.date
            )));
        }

        let cloud = scene::generate(count, &mut self.rng);
        self.scene.clear_cloud();
        cloud.place(&mut self.scene);

        self.overlay.render(&latest.date, count, &mut self.page);

        Ok(Outcome {
            date: latest.date.clone(),
            count,
            markers: cloud.len(),
        })
    }
}
