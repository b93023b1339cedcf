use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::board::PipelineBoard;
use crate::client::components::Page;
use crate::client::store::application::ApplicationState;
use crate::client::store::pipeline::PipelineState;
use crate::client::store::toast::ToastState;
use crate::model::cv::CvDto;

#[component]
pub fn Board(company: String, job_title: String) -> Element {
    let mut pipelines = use_context::<Signal<PipelineState>>();
    let mut applications = use_context::<Signal<ApplicationState>>();
    let mut toasts = use_context::<Signal<ToastState>>();
    let mut cvs = use_signal(Vec::<CvDto>::new);

    // Initial load. Each collection fails independently; the board renders
    // whatever made it through and failures surface as toasts.
    use_resource(move || async move {
        match api::pipelines::get_pipelines().await {
            Ok(list) => pipelines.write().set_all(list),
            Err(err) => {
                tracing::error!("failed to load pipelines: {err}");
                toasts.write().error(err.to_string());
            }
        }
        match api::applications::get_applications(None).await {
            Ok(list) => applications.write().set_all(list),
            Err(err) => {
                tracing::error!("failed to load applications: {err}");
                toasts.write().error(err.to_string());
            }
        }
        match api::cvs::get_cvs().await {
            Ok(list) => cvs.set(list),
            Err(err) => {
                // The CV selector is optional decoration; log and move on.
                tracing::error!("failed to load CVs: {err}");
            }
        }
    });

    // Job-board deep links land here with ?company=&job_title=; hand them
    // to the board so it can open a prefilled application form.
    let prefill = if company.is_empty() && job_title.is_empty() {
        None
    } else {
        Some((company, job_title))
    };

    rsx!(
        Title { "Board | JobTrail" }
        Meta {
            name: "description",
            content: "Track your job applications across every stage of your search."
        }
        Page { class: "flex flex-col",
            PipelineBoard { cvs: cvs, prefill: prefill }
        }
    )
}
