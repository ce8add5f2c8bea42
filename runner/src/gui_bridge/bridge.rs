use crate::generator::layout::{build_layout_from_config, GeneratorConfig};
use crate::gui_bridge::model::SummaryModel;
use crate::workflow::config::LayoutConfig;
use crate::workflow::runner::Runner;
use anyhow::Result;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn bridge_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

/// Bridge that hosts the summary HTTP endpoint and processes incoming layouts.
pub struct HostBridge {
    state: Arc<RwLock<SummaryModel>>,
}

impl HostBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let state = Arc::new(RwLock::new(SummaryModel::default()));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let get_route = warp::path("summary")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<SummaryModel>>| warp::reply::json(&*state.read().unwrap()));

        let nodes_route = warp::path("nodes")
            .and(warp::get())
            .and(runner_filter.clone())
            .map(|runner: Arc<Runner>| warp::reply::json(&runner.signatures()));

        let post_route = warp::path("ingest")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(runner_filter.clone())
            .and_then(
                |layout: LayoutConfig,
                 state: Arc<RwLock<SummaryModel>>,
                 runner: Arc<Runner>| async move {
                    match runner.execute(&layout) {
                        Ok(result) => {
                            let mut guard = state.write().unwrap();
                            *guard = SummaryModel::from_result(&result);
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({"status": "ok"})),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("ingest error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        let generator_route = warp::path("ingest-config")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(runner_filter)
            .and_then(
                |config: GeneratorConfig,
                 state: Arc<RwLock<SummaryModel>>,
                 runner: Arc<Runner>| async move {
                    match build_layout_from_config(&config)
                        .and_then(|layout| runner.execute(&layout))
                    {
                        Ok(result) => {
                            let mut guard = state.write().unwrap();
                            *guard = SummaryModel::from_result(&result);
                            if let Some(name) = config.scenario.as_ref() {
                                println!(
                                    "[bridge] Scenario {} -> {} regions",
                                    name, guard.region_count
                                );
                            }
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "regions": guard.region_count,
                                    "description": config.description.clone().unwrap_or_default()
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("ingest-config error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        thread::spawn(move || {
            let routes = get_route.or(nodes_route).or(post_route).or(generator_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(bridge_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, model: &SummaryModel) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = model.clone();
        println!(
            "[bridge] regions: {}, merged peak: {:.3}",
            guard.region_count, guard.merged_peak
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[bridge] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> SummaryModel {
        self.state.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::layout::build_layout;
    use crate::workflow::runner::Runner;
    use std::sync::Arc;

    #[test]
    fn host_bridge_updates_state() {
        let runner = Arc::new(Runner::new());
        let bridge = HostBridge::new(runner.clone());
        let layout = build_layout(2, 11).unwrap();
        let result = runner.execute(&layout).unwrap();
        let model = SummaryModel::from_result(&result);
        bridge.publish(&model).unwrap();
        assert_eq!(bridge.snapshot().region_count, 2);
    }
}
