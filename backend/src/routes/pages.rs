//! Static content pages
//!
//! The original site rendered HTML templates for these paths; templating is
//! an external concern here, so they serve their content as JSON.

use axum::Json;
use serde::Serialize;

/// Static page content
#[derive(Serialize)]
pub struct PageContent {
    pub title: &'static str,
    pub body: &'static [&'static str],
}

/// GET / - landing page describing the calculator
pub async fn index() -> Json<PageContent> {
    Json(PageContent {
        title: "PowerFit BMI Calculator",
        body: &[
            "Calculate your Body Mass Index from your age, height, and weight.",
            "POST age, height (cm), and weight (kg) to /calculate to get your BMI, \
             category, and whether a personalized plan is available.",
        ],
    })
}

/// GET /about
pub async fn about() -> Json<PageContent> {
    Json(PageContent {
        title: "About PowerFit",
        body: &[
            "PowerFit helps you understand where your BMI falls and what to do about it.",
            "Every calculation is recorded so you can see aggregate statistics over time.",
        ],
    })
}

/// GET /contact
pub async fn contact() -> Json<PageContent> {
    Json(PageContent {
        title: "Contact",
        body: &["Questions or feedback? Reach the PowerFit team at support@powerfit.example."],
    })
}

/// GET /PowerFit_plus
pub async fn powerfit_plus() -> Json<PageContent> {
    Json(PageContent {
        title: "PowerFit Plus",
        body: &[
            "PowerFit Plus is our premium program with guided workout routines and \
             weekly meal plans tailored to your BMI category.",
        ],
    })
}
