use dioxus::prelude::*;

use crate::components::{Modal, StatusLine};
use crate::core::config::DashboardConfig;
use crate::core::platform;
use crate::data::reports::{
    generation_notice, report, share_link, EmailForm, EmailSchedule, ReportEntry, RECENT_REPORTS,
    REPORTS,
};
use crate::export::report::{report_document, report_filename};
use crate::export::{copy_to_clipboard, download_bytes, run_export, ExportError, ExportStatus};

async fn download_report(entry: ReportEntry) -> Result<String, ExportError> {
    let filename = report_filename(&entry);
    let delivery = download_bytes(
        &filename,
        "text/plain",
        report_document(&entry).into_bytes(),
    )
    .await?;
    Ok(delivery.describe(entry.name))
}

async fn share_report(link: String) -> Result<String, ExportError> {
    copy_to_clipboard(link.clone()).await?;
    Ok(format!("Share link copied: {link}"))
}

#[component]
pub fn Reports() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.map(|s| s()).unwrap_or_default();

    let config = use_context::<DashboardConfig>();
    let mut status = use_signal(ExportStatus::default);
    let busy = use_signal(|| false);
    let mut emailing = use_signal(|| None::<ReportEntry>);
    let mut sharing = use_signal(|| None::<ReportEntry>);

    let origin = platform::page_origin().unwrap_or_else(|| config.share_origin.clone());

    let on_download = move |entry: ReportEntry| {
        run_export(status, busy, "Preparing report", download_report(entry));
    };
    let on_copy_link = move |link: String| {
        sharing.set(None);
        run_export(status, busy, "Copying link", share_report(link));
    };
    let mut on_generate = move |entry: ReportEntry| {
        tracing::info!(report = entry.name, "report generation requested");
        status.set(ExportStatus::Done(generation_notice(&entry)));
    };

    rsx! {
        section { class: "page page-reports",
            div { class: "page__header",
                h1 { {crate::t!("reports-title")} }
            }

            section { class: "panel",
                h2 { {crate::t!("reports-available")} }
                div { class: "reports__grid",
                    for entry in REPORTS {
                        article { key: "{entry.name}", class: "report-card",
                            h3 { class: "report-card__name", "{entry.name}" }
                            p { class: "report-card__description", "{entry.description}" }
                            dl { class: "report-card__meta",
                                dt { "Last generated" }
                                dd { "{entry.last_generated}" }
                                dt { "Size" }
                                dd { "{entry.size}" }
                                dt { "Format" }
                                dd { "{entry.format}" }
                            }
                            div { class: "report-card__actions",
                                button {
                                    r#type: "button",
                                    class: "button button--primary",
                                    disabled: busy(),
                                    onclick: move |_| on_download(entry),
                                    {crate::t!("reports-download")}
                                }
                                button {
                                    r#type: "button",
                                    class: "button",
                                    onclick: move |_| sharing.set(Some(entry)),
                                    {crate::t!("reports-share")}
                                }
                                button {
                                    r#type: "button",
                                    class: "button",
                                    onclick: move |_| emailing.set(Some(entry)),
                                    {crate::t!("reports-email")}
                                }
                                button {
                                    r#type: "button",
                                    class: "button button--ghost",
                                    onclick: move |_| on_generate(entry),
                                    {crate::t!("reports-generate")}
                                }
                            }
                        }
                    }
                }
            }

            StatusLine { status: status() }

            section { class: "panel",
                h2 { {crate::t!("reports-recent")} }
                ul { class: "reports__recent",
                    for recent in RECENT_REPORTS {
                        li { key: "{recent.name}", class: "reports__recent-item",
                            div {
                                strong { "{recent.name}" }
                                span { class: "panel__meta", " {recent.date}" }
                            }
                            span { class: "badge badge--ready", "{recent.status}" }
                            button {
                                r#type: "button",
                                class: "button button--ghost",
                                disabled: busy(),
                                onclick: move |_| on_download(report(recent.source)),
                                {crate::t!("reports-download")}
                            }
                        }
                    }
                }
            }

            if let Some(entry) = sharing() {
                Modal {
                    title: crate::t!("reports-share-title"),
                    on_close: move |_| sharing.set(None),
                    ShareReportPanel {
                        entry,
                        link: share_link(&origin, entry.name),
                        busy: busy(),
                        on_copy: on_copy_link,
                        on_email: move |_| {
                            sharing.set(None);
                            emailing.set(Some(entry));
                        },
                    }
                }
            }

            if let Some(entry) = emailing() {
                Modal {
                    title: crate::t!("reports-email-title"),
                    on_close: move |_| emailing.set(None),
                    EmailReportForm {
                        entry,
                        on_sent: move |message: String| {
                            emailing.set(None);
                            status.set(ExportStatus::Done(message));
                        },
                    }
                }
            }
        }
    }
}

/// The link is shown before anything touches the clipboard.
#[component]
fn ShareReportPanel(
    entry: ReportEntry,
    link: String,
    busy: bool,
    on_copy: EventHandler<String>,
    on_email: EventHandler<()>,
) -> Element {
    let copy = {
        let link = link.clone();
        move |_| on_copy.call(link.clone())
    };

    rsx! {
        div { class: "share-panel",
            h4 { class: "share-panel__name", "{entry.name}" }
            p { class: "panel__meta", {crate::t!("reports-share-hint")} }
            input {
                class: "share-panel__link",
                r#type: "text",
                readonly: true,
                value: "{link}",
            }
            div { class: "share-panel__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy,
                    onclick: copy,
                    {crate::t!("reports-share-copy")}
                }
                button {
                    r#type: "button",
                    class: "button",
                    onclick: move |_| on_email.call(()),
                    {crate::t!("reports-share-email")}
                }
            }
        }
    }
}

#[component]
fn EmailReportForm(entry: ReportEntry, on_sent: EventHandler<String>) -> Element {
    let mut form = use_signal(|| EmailForm {
        subject: entry.name.to_string(),
        ..EmailForm::default()
    });
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match form.peek().schedule_send() {
            Ok(message) => {
                tracing::info!(report = entry.name, "email scheduled");
                on_sent.call(message);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    rsx! {
        form { class: "email-form", onsubmit: on_submit,
            label { class: "email-form__field",
                span { {crate::t!("reports-email-recipients")} }
                input {
                    r#type: "text",
                    placeholder: "name@company.com, team@company.com",
                    value: "{form().recipients}",
                    oninput: move |evt: FormEvent| form.write().recipients = evt.value(),
                }
            }
            label { class: "email-form__field",
                span { {crate::t!("reports-email-subject")} }
                input {
                    r#type: "text",
                    value: "{form().subject}",
                    oninput: move |evt: FormEvent| form.write().subject = evt.value(),
                }
            }
            label { class: "email-form__field",
                span { {crate::t!("reports-email-message")} }
                textarea {
                    rows: "4",
                    value: "{form().message}",
                    oninput: move |evt: FormEvent| form.write().message = evt.value(),
                }
            }
            label { class: "email-form__field",
                span { {crate::t!("reports-email-schedule")} }
                select {
                    value: "{form().schedule.value()}",
                    oninput: move |evt: FormEvent| {
                        form.write().schedule = EmailSchedule::from_value(&evt.value());
                    },
                    for schedule in EmailSchedule::ALL {
                        option { key: "{schedule.value()}", value: "{schedule.value()}", "{schedule.label()}" }
                    }
                }
            }
            if let Some(message) = error() {
                p { class: "status-line status-line--error", role: "alert", "⚠️ {message}" }
            }
            button { r#type: "submit", class: "button button--primary",
                {crate::t!("reports-email-send")}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn SharePreview(busy: bool) -> Element {
        let entry = REPORTS[0];
        rsx! {
            ShareReportPanel {
                entry,
                link: share_link("https://carbontrack.example/", entry.name),
                busy,
                on_copy: move |_: String| {},
                on_email: move |_: ()| {},
            }
        }
    }

    fn render_preview(busy: bool) -> String {
        crate::i18n::init();
        let mut dom = VirtualDom::new_with_props(SharePreview, SharePreviewProps { busy });
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }

    #[test]
    fn share_panel_shows_the_link_before_copying() {
        let html = render_preview(false);
        assert!(html.contains("Monthly Carbon Report"));
        assert!(html.contains("https://carbontrack.example/reports/shared/monthly-carbon-report"));
        assert!(html.contains("share-panel__link"));
    }
}
