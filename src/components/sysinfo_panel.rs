use crate::api::MirrorClient;
use crate::components::platform;
use crate::settings::Settings;
use crate::sysinfo::{SysInfoReport, UsageBar};
use dioxus::logger::tracing::error;
use dioxus::prelude::*;

/// Memory and disk usage, refreshed on a fixed interval. A failed poll is
/// logged and the next one goes ahead as scheduled.
#[component]
pub fn SysInfoPanel() -> Element {
    let settings = use_context::<Signal<Settings>>();
    let client = use_context::<MirrorClient>();
    let mut report = use_signal(|| None::<SysInfoReport>);

    use_hook(move || {
        spawn(async move {
            loop {
                let (interval, units) = {
                    let settings = settings.peek();
                    (settings.poll_interval_ms(), settings.byte_units)
                };
                platform::sleep_ms(interval).await;
                match client.fetch_sysinfo().await {
                    Ok(info) => report.set(Some(SysInfoReport::from_sysinfo(&info, units))),
                    Err(err) => error!("sysinfo poll failed: {err}"),
                }
            }
        });
    });

    let Some(current) = report() else {
        return rsx! {
            div { id: "sysinfo", class: "sysinfo loading" }
        };
    };

    rsx! {
        div { id: "sysinfo", class: "sysinfo",
            div { class: "memory",
                label { r#for: "mem_usage",
                    "Memory: "
                    span { id: "used_mem_readable", "{current.memory.used_text}" }
                    "/"
                    span { id: "total_mem_readable", "{current.memory.total_text}" }
                }
                progress {
                    id: "mem_usage",
                    max: "{current.memory.total}",
                    value: "{current.memory.used}",
                }
            }
            div { id: "disks",
                for (i, disk) in current.disks.iter().enumerate() {
                    DiskUsage { key: "{i}-{disk.label}", bar: disk.clone() }
                }
            }
        }
    }
}

#[component]
fn DiskUsage(bar: UsageBar) -> Element {
    rsx! {
        div {
            label { "{bar.caption()}" }
            progress {
                class: "disk_usage",
                style: "width:100%; box-sizing:border-box;",
                max: "{bar.total}",
                value: "{bar.used}",
            }
        }
    }
}
