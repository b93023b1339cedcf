use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::store::application::ApplicationState;
use crate::client::store::toast::ToastState;
use crate::client::util::refetch::refetch_applications;
use crate::model::application::{
    CreateJobApplicationDto, JobApplicationDto, UpdateJobApplicationDto,
};
use crate::model::cv::CvDto;

/// Draft of the application form dialog. `id` is `None` for a create.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicationFormState {
    pub id: Option<i64>,
    pub pipeline_id: i64,
    pub company_name: String,
    pub job_title: String,
    /// Raw `YYYY-MM-DD` input value, parsed on submit.
    pub application_date: String,
    pub cv_id: Option<i64>,
    /// In-flight flag scoped to this dialog; set while its request runs so
    /// the submit controls can be disabled without blocking unrelated UI.
    pub busy: bool,
}

impl ApplicationFormState {
    /// Blank form for a manual create; the date defaults to today.
    pub fn create(pipeline_id: i64) -> Self {
        Self {
            id: None,
            pipeline_id,
            company_name: String::new(),
            job_title: String::new(),
            application_date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            cv_id: None,
            busy: false,
        }
    }

    /// Mark this dialog's request in flight. Returns false when a submit is
    /// already pending, so a double-click cannot fire twice.
    pub fn begin_submit(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Form seeded from a job-search result.
    pub fn prefill(pipeline_id: i64, company_name: String, job_title: String) -> Self {
        Self {
            company_name,
            job_title,
            ..Self::create(pipeline_id)
        }
    }

    pub fn edit(application: &JobApplicationDto) -> Self {
        Self {
            id: Some(application.id),
            pipeline_id: application.pipeline_id,
            company_name: application.company_name.clone(),
            job_title: application.job_title.clone(),
            application_date: application.application_date.format("%Y-%m-%d").to_string(),
            cv_id: application.cv_id,
            busy: false,
        }
    }
}

/// Create/edit dialog for an application, with the CV selector fed from the
/// resume editor's listing. Validation failures surface as toasts and leave
/// the stores untouched.
#[component]
pub fn ApplicationForm(
    form: Signal<Option<ApplicationFormState>>,
    cvs: Signal<Vec<CvDto>>,
) -> Element {
    let mut applications = use_context::<Signal<ApplicationState>>();
    let mut toasts = use_context::<Signal<ToastState>>();
    let mut form = form;

    let Some(state) = form.read().clone() else {
        return rsx!();
    };
    let editing = state.id.is_some();
    let cv_options: Vec<CvDto> = cvs.read().to_vec();

    let submit = move |_| {
        let Some(state) = form.read().clone() else {
            return;
        };
        let company_name = state.company_name.trim().to_string();
        let job_title = state.job_title.trim().to_string();
        if company_name.is_empty() || job_title.is_empty() {
            toasts
                .write()
                .error("Company name and job title are required");
            return;
        }
        let application_date =
            match NaiveDate::parse_from_str(&state.application_date, "%Y-%m-%d") {
                Ok(date) => date,
                Err(_) => {
                    toasts.write().error("Application date is invalid");
                    return;
                }
            };
        {
            let mut guard = form.write();
            match guard.as_mut() {
                Some(state) => {
                    if !state.begin_submit() {
                        return;
                    }
                }
                None => return,
            }
        }

        match state.id {
            None => {
                let dto = CreateJobApplicationDto {
                    company_name,
                    job_title,
                    application_date,
                    pipeline_id: state.pipeline_id,
                    position: applications.read().append_position(state.pipeline_id),
                    cv_id: state.cv_id,
                };
                spawn(async move {
                    match api::applications::create_application(&dto).await {
                        Ok(created) => {
                            applications.write().insert(created);
                            toasts.write().success("Application created");
                        }
                        Err(err) => {
                            tracing::error!("failed to create application: {err}");
                            toasts.write().error(err.to_string());
                            refetch_applications(applications, toasts).await;
                        }
                    }
                    form.set(None);
                });
            }
            Some(id) => {
                // Optimistic edit; the server-confirmed record replaces it
                // on success, a refetch discards it on failure.
                let existing = applications.read().get(id).cloned();
                if let Some(mut local) = existing {
                    local.company_name = company_name.clone();
                    local.job_title = job_title.clone();
                    local.application_date = application_date;
                    local.cv_id = state.cv_id;
                    applications.write().update(local);
                }
                let update = UpdateJobApplicationDto {
                    company_name: Some(company_name),
                    job_title: Some(job_title),
                    application_date: Some(application_date),
                    cv_id: Some(state.cv_id),
                    ..Default::default()
                };
                spawn(async move {
                    match api::applications::update_application(id, &update).await {
                        Ok(updated) => {
                            applications.write().update(updated);
                            toasts.write().success("Application updated");
                        }
                        Err(err) => {
                            tracing::error!("failed to update application: {err}");
                            toasts.write().error(err.to_string());
                            refetch_applications(applications, toasts).await;
                        }
                    }
                    form.set(None);
                });
            }
        }
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box flex flex-col gap-3",
                h3 { class: "font-bold text-lg",
                    if editing { "Edit Application" } else { "New Application" }
                }
                label { class: "form-control",
                    span { class: "label-text", "Company Name" }
                    input {
                        class: "input input-bordered",
                        value: "{state.company_name}",
                        oninput: move |evt| {
                            if let Some(state) = form.write().as_mut() {
                                state.company_name = evt.value();
                            }
                        }
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Job Title" }
                    input {
                        class: "input input-bordered",
                        value: "{state.job_title}",
                        oninput: move |evt| {
                            if let Some(state) = form.write().as_mut() {
                                state.job_title = evt.value();
                            }
                        }
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Application Date" }
                    input {
                        class: "input input-bordered",
                        r#type: "date",
                        value: "{state.application_date}",
                        oninput: move |evt| {
                            if let Some(state) = form.write().as_mut() {
                                state.application_date = evt.value();
                            }
                        }
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "CV" }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| {
                            if let Some(state) = form.write().as_mut() {
                                state.cv_id = evt.value().parse::<i64>().ok();
                            }
                        },
                        option {
                            value: "",
                            selected: state.cv_id.is_none(),
                            "No CV"
                        }
                        {cv_options.into_iter().map(|cv| {
                            let selected = state.cv_id == Some(cv.id);
                            rsx!(
                                option {
                                    key: "{cv.id}",
                                    value: "{cv.id}",
                                    selected: selected,
                                    "{cv.title}"
                                }
                            )
                        })}
                    }
                }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        disabled: state.busy,
                        onclick: move |_| form.set(None),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: state.busy,
                        onclick: submit,
                        if editing { "Save" } else { "Create" }
                    }
                }
            }
        }
    )
}
