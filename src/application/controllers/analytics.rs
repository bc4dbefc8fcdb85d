//! Analytics dashboard: statistics, four charts and recent clicks.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{ChartKind, ShortenerApi};
use crate::presentation::charts::ChartConfig;
use crate::presentation::rows::{ActivityRow, StatCards};
use crate::presentation::view::AnalyticsView;

pub struct AnalyticsController<A: ShortenerApi, V: AnalyticsView> {
    api: Arc<A>,
    view: Arc<V>,
    charts: Mutex<HashMap<ChartKind, ChartConfig>>,
}

impl<A: ShortenerApi, V: AnalyticsView> AnalyticsController<A, V> {
    pub fn new(api: Arc<A>, view: Arc<V>) -> Self {
        Self {
            api,
            view,
            charts: Mutex::new(HashMap::new()),
        }
    }

    fn charts_mut(&self) -> MutexGuard<'_, HashMap<ChartKind, ChartConfig>> {
        self.charts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Loads the whole dashboard.
    ///
    /// Statistics first, then every chart in [`ChartKind::ALL`] order, then the
    /// recent activity table. A failing step is logged and the next one runs.
    pub async fn load(&self) {
        self.load_statistics().await;

        self.init_charts();
        for kind in ChartKind::ALL {
            self.load_chart(kind).await;
        }

        self.load_recent_activity().await;
    }

    pub async fn load_statistics(&self) {
        match self.api.dashboard_stats().await {
            Ok(stats) => self.view.render_stats(&StatCards::from(&stats)),
            Err(e) => tracing::error!(error = %e, "Error loading statistics"),
        }
    }

    /// Creates the four charts with empty data.
    pub fn init_charts(&self) {
        let mut charts = self.charts_mut();
        for kind in ChartKind::ALL {
            let chart = ChartConfig::empty(kind);
            self.view.init_chart(&chart);
            charts.insert(kind, chart);
        }
    }

    pub async fn load_chart(&self, kind: ChartKind) {
        let series = match self.api.chart(kind).await {
            Ok(series) => series,
            Err(e) => {
                tracing::error!(error = %e, chart = %kind, "Error loading chart data");
                return;
            }
        };

        let chart = {
            let mut charts = self.charts_mut();
            let chart = charts
                .entry(kind)
                .or_insert_with(|| ChartConfig::empty(kind));
            chart.apply(&series);
            chart.clone()
        };
        self.view.update_chart(&chart);
    }

    pub async fn load_recent_activity(&self) {
        match self.api.recent_activity().await {
            Ok(activities) => {
                let rows: Vec<ActivityRow> = activities.iter().map(ActivityRow::from).collect();
                self.view.render_recent_activity(&rows);
            }
            Err(e) => tracing::error!(error = %e, "Error loading recent activity"),
        }
    }

    /// Snapshot of every initialised chart in dashboard order.
    pub fn charts(&self) -> Vec<ChartConfig> {
        let charts = self.charts_mut();
        ChartKind::ALL
            .iter()
            .filter_map(|kind| charts.get(kind).cloned())
            .collect()
    }
}
