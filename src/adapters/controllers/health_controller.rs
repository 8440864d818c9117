use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use sysinfo::System;
use tracing::info;

use crate::domain::{
    config::server::{ServerConfig, MAX_FILES_PER_REQUEST},
    models::image::TargetFormat,
};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub limits: ServiceLimits,
    pub metrics: SystemMetrics,
}

#[derive(Debug, Serialize)]
pub struct ServiceLimits {
    #[serde(rename = "maxFiles")]
    pub max_files: usize,
    #[serde(rename = "maxBodyBytes")]
    pub max_body_bytes: usize,
    #[serde(rename = "supportedFormats")]
    pub supported_formats: Vec<TargetFormat>,
}

#[derive(Debug, Serialize)]
pub struct SystemMetrics {
    #[serde(rename = "cpuUsagePercent")]
    pub cpu_usage_percent: f32,
    #[serde(rename = "memoryUsedBytes")]
    pub memory_used_bytes: u64,
    #[serde(rename = "memoryTotalBytes")]
    pub memory_total_bytes: u64,
    #[serde(rename = "memoryUsagePercent")]
    pub memory_usage_percent: f32,
}

pub struct HealthController;

impl HealthController {
    /// GET /api/health
    pub async fn health_check(State(config): State<Arc<ServerConfig>>) -> Json<HealthResponse> {
        info!("Health check requested");

        // Only refresh what's reported
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let memory_used = sys.used_memory();
        let memory_total = sys.total_memory();
        let memory_usage_percent = if memory_total > 0 {
            (memory_used as f32 / memory_total as f32) * 100.0
        } else {
            0.0
        };

        Json(HealthResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            limits: ServiceLimits {
                max_files: MAX_FILES_PER_REQUEST,
                max_body_bytes: config.max_body_bytes,
                supported_formats: TargetFormat::ALL.to_vec(),
            },
            metrics: SystemMetrics {
                cpu_usage_percent: sys.global_cpu_usage(),
                memory_used_bytes: memory_used,
                memory_total_bytes: memory_total,
                memory_usage_percent,
            },
        })
    }
}
