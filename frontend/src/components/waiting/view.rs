//! View rendering for the waiting page: status header, progress panel,
//! rotating idle quote.

use yew::prelude::*;

use common::format::format_progress_label;
use common::jobs::BulkJob;

use super::state::WaitingView;

pub fn view(view: &WaitingView, _ctx: &Context<WaitingView>) -> Html {
    if view.job_id.is_empty() {
        return html! {
            <div class="card">
                <h1>{"Waiting Page"}</h1>
                <p class="muted">{"Missing job ID."}</p>
            </div>
        };
    }

    html! {
        <div class="stack">
            <div class="card">
                <h1>{"Generating Your Pages"}</h1>
                <p class="muted">{ format!("Job ID: {}", view.job_id) }</p>
                {
                    match &view.job {
                        Some(job) => html! {
                            <p class="muted">{ format!("Status: {}", job.status.label()) }</p>
                        },
                        None => html! {},
                    }
                }
                {
                    match &view.error {
                        Some(error) => html! { <p class="error-text">{error}</p> },
                        None => html! {},
                    }
                }
            </div>

            {
                match &view.job {
                    Some(job) => progress_panel(job),
                    None => html! {},
                }
            }

            <div class="card">
                <p class="muted">{"Useless Quote"}</p>
                <p class="quote">{ view.current_quote() }</p>
            </div>
        </div>
    }
}

fn progress_panel(job: &BulkJob) -> Html {
    let percent = job.progress_percent();
    html! {
        <div class="card stack">
            <div class="card-head">
                <span>{"Progress"}</span>
                <span class="muted">
                    { format_progress_label(job.processed_rows, job.total_rows) }
                </span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style={format!("width: {percent}%;")} />
            </div>
            <div class="stat-grid">
                <div class="stat">
                    <p class="stat-value ok">{job.processed_rows}</p>
                    <p class="muted">{"Processed"}</p>
                </div>
                <div class="stat">
                    <p class="stat-value bad">{job.failed_rows}</p>
                    <p class="muted">{"Failed"}</p>
                </div>
                <div class="stat">
                    <p class="stat-value">{job.total_rows}</p>
                    <p class="muted">{"Total"}</p>
                </div>
            </div>
            {
                if job.updated_at.is_empty() {
                    html! {}
                } else {
                    html! {
                        <p class="hint">{ format!("Last updated: {}", job.updated_at) }</p>
                    }
                }
            }
        </div>
    }
}
