//! Static informational content

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct InfoSection {
    pub title: &'static str,
    pub content: &'static str,
    #[serde(skip_serializing_if = "no_items")]
    pub items: &'static [&'static str],
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn no_items(items: &&[&str]) -> bool {
    items.is_empty()
}

#[derive(Debug, Clone, Serialize)]
pub struct InfoContent {
    pub sections: &'static [InfoSection],
}

const SECTIONS: &[InfoSection] = &[
    InfoSection {
        title: "Our Mission",
        content: "BLUVIA provides accessible water analysis data for Arizona's environmental \
                  researchers, agricultural professionals, and land developers, so that \
                  stakeholders can make informed decisions about water usage and environmental \
                  protection.",
        items: &[],
    },
    InfoSection {
        title: "Technology",
        content: "Concentrations near the six monitoring sites are the recorded measurements of \
                  the closest listed site within three miles. Elsewhere they are estimates \
                  scaled by a location factor, reported with a wider uncertainty band. Risk \
                  scores compare each concentration with its background level on a 0-100 scale.",
        items: &[],
    },
    InfoSection {
        title: "Data Sources",
        content: "Data from multiple organizations is combined to maintain a comprehensive \
                  water composition picture for Arizona:",
        items: &[
            "Arizona Department of Environmental Quality",
            "USGS Water Quality Data",
            "Environmental Protection Agency Records",
            "Academic Research Institutions",
        ],
    },
];

/// GET /api/info
pub async fn info() -> Json<InfoContent> {
    Json(InfoContent { sections: SECTIONS })
}
