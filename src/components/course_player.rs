//! Course Player Component
//!
//! `<video>` element with custom transport controls. Position is polled once
//! a second while playing and reported as the running timestamp and as a
//! progress update.

use std::time::Duration;

use leptos::html::Video;
use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lms_core::domain::VideoProgressUpdate;
use lms_core::timestamp::seconds_to_timestamp;
use lms_core::{PlaybackState, PLAYBACK_RATES};
use wasm_bindgen_futures::JsFuture;

use crate::context::use_course;
use crate::store::{use_app_store, AppStateStoreFields};

const PROGRESS_INTERVAL: Duration = Duration::from_secs(1);

#[component]
pub fn CoursePlayer(
    #[prop(into)] video_url: String,
    #[prop(into)] on_progress: Callback<VideoProgressUpdate>,
) -> impl IntoView {
    let ctx = use_course();
    let store = use_app_store();
    let video_ref = NodeRef::<Video>::new();
    let (playback, set_playback) = signal(PlaybackState::new());

    let title = move || {
        let module = ctx.current_video().unwrap_or_else(|| "1".to_string());
        format!("Module {}: Interactive Learning", module)
    };

    // Report the position while playing
    let report_progress = move || {
        if !playback.with_untracked(|p| p.playing) {
            return;
        }
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        let mut tick = None;
        set_playback.update(|p| tick = p.on_progress(video.current_time()));
        if let Some(tick) = tick {
            store.current_timestamp().set(tick.timestamp);
            on_progress.run(tick.update);
        }
    };
    match set_interval_with_handle(report_progress, PROGRESS_INTERVAL) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => tracing::warn!(error = ?e, "Could not start progress polling"),
    }

    // Keep the element's volume and rate in step with the controls
    Effect::new(move |_| {
        let (volume, rate) = playback.with(|p| (p.volume, p.playback_rate));
        if let Some(video) = video_ref.get() {
            video.set_volume(volume);
            video.set_playback_rate(rate);
        }
    });

    // Seek requests from the notes list
    Effect::new(move |_| {
        let Some(timestamp) = store.seek_request().get() else {
            return;
        };
        let mut target = 0.0;
        set_playback.update(|p| target = p.seek_to_timestamp(&timestamp));
        if let Some(video) = video_ref.get_untracked() {
            video.set_current_time(target);
        }
        store.current_timestamp().set(seconds_to_timestamp(target));
        store.seek_request().set(None);
    });

    let toggle_play = move |_: leptos::ev::MouseEvent| {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        let mut playing = false;
        set_playback.update(|p| playing = p.toggle_play());
        if !playing {
            if let Err(e) = video.pause() {
                tracing::warn!(error = ?e, "Pause failed");
            }
            return;
        }
        match video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    tracing::warn!(error = ?e, "Playback was refused");
                    let _ = set_playback.try_update(|p| p.pause());
                }
            }),
            Err(e) => {
                tracing::warn!(error = ?e, "Playback failed to start");
                set_playback.update(|p| p.pause());
            }
        }
    };

    let update_duration = move |_: leptos::ev::Event| {
        if let Some(video) = video_ref.get_untracked() {
            set_playback.update(|p| p.set_duration(video.duration()));
        }
    };

    let on_seek_input = move |ev: leptos::ev::Event| {
        let Ok(seconds) = event_target_value(&ev).parse::<f64>() else {
            return;
        };
        let mut target = 0.0;
        set_playback.update(|p| {
            p.begin_seek();
            target = p.seek(seconds);
        });
        if let Some(video) = video_ref.get_untracked() {
            video.set_current_time(target);
        }
    };

    let end_seek = move || {
        if playback.with_untracked(|p| p.seeking) {
            set_playback.update(|p| p.end_seek());
        }
    };

    let on_volume_input = move |ev: leptos::ev::Event| {
        if let Ok(volume) = event_target_value(&ev).parse::<f64>() {
            set_playback.update(|p| {
                p.set_volume(volume);
            });
        }
    };

    let on_rate_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let accepted = value
            .parse::<f64>()
            .map(|rate| {
                let mut ok = false;
                set_playback.update(|p| ok = p.set_playback_rate(rate));
                ok
            })
            .unwrap_or(false);
        if !accepted {
            tracing::warn!(rate = %value, "Unsupported playback rate");
        }
    };

    let fullscreen = move |_: leptos::ev::MouseEvent| {
        if let Some(video) = video_ref.get_untracked() {
            if let Err(e) = video.request_fullscreen() {
                tracing::warn!(error = ?e, "Fullscreen request denied");
            }
        }
    };

    view! {
        <div class="unified-course-player">
            <div class="player-container">
                <div class="video-player-wrapper">
                    <video
                        node_ref=video_ref
                        class="video-element"
                        src=video_url
                        preload="metadata"
                        playsinline=true
                        on:loadedmetadata=update_duration
                        on:durationchange=update_duration
                        on:play=move |_| set_playback.update(|p| p.start())
                        on:pause=move |_| set_playback.update(|p| p.pause())
                        on:ended=move |_| set_playback.update(|p| p.pause())
                        on:click=toggle_play
                    ></video>

                    <div class="custom-controls">
                        <div class="progress-section">
                            <input
                                type="range"
                                min="0"
                                step="any"
                                class="progress-bar"
                                prop:max=move || playback.with(|p| p.duration)
                                prop:value=move || playback.with(|p| p.played_seconds)
                                title=move || playback.with(|p| p.current_timestamp())
                                on:input=on_seek_input
                                on:change=move |_| end_seek()
                                on:mouseup=move |_| end_seek()
                                on:touchend=move |_| end_seek()
                            />
                        </div>

                        <div class="control-bar">
                            <div class="left-controls">
                                <button
                                    class="control-btn play-btn"
                                    title=move || if playback.with(|p| p.playing) { "Pause" } else { "Play" }
                                    on:click=toggle_play
                                >
                                    <Show
                                        when=move || playback.with(|p| p.playing)
                                        fallback=|| view! {
                                            <svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor">
                                                <polygon points="5 3 19 12 5 21" />
                                            </svg>
                                        }
                                    >
                                        <svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor">
                                            <rect x="6" y="4" width="4" height="16" />
                                            <rect x="14" y="4" width="4" height="16" />
                                        </svg>
                                    </Show>
                                </button>

                                <div class="volume-control">
                                    <input
                                        type="range"
                                        min="0"
                                        max="1"
                                        step="0.1"
                                        class="volume-slider"
                                        prop:value=move || playback.with(|p| p.volume)
                                        on:input=on_volume_input
                                    />
                                </div>

                                <span class="time-display">{move || playback.with(|p| p.time_display())}</span>
                            </div>

                            <div class="right-controls">
                                <select
                                    class="playback-rate-select"
                                    prop:value=move || playback.with(|p| p.playback_rate.to_string())
                                    on:change=on_rate_change
                                >
                                    {PLAYBACK_RATES.iter().map(|rate| view! {
                                        <option value=rate.to_string()>{format!("{}x", rate)}</option>
                                    }).collect_view()}
                                </select>

                                <button class="control-btn fullscreen-btn" title="Fullscreen" on:click=fullscreen>
                                    <svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor">
                                        <path d="M7 14H5v5h5v-2H7v-3zm-2-4h2V7h3V5H5v5zm12 7h-3v2h5v-5h-2v3zM14 5v2h3v3h2V5h-5z" />
                                    </svg>
                                </button>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="video-info">
                    <h2 class="video-title">{title}</h2>
                </div>
            </div>
        </div>
    }
}
