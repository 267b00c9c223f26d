//! 件数指定の一括選択ダイアログ

use leptos::prelude::*;

/// 入力欄の値を件数に変換（不正・負の値は0）
pub fn parse_row_count(input: &str) -> u64 {
    input.trim().parse().unwrap_or(0)
}

#[component]
pub fn RowCountDialog<FC, FS>(
    row_count: RwSignal<u64>,
    is_running: ReadSignal<bool>,
    progress: ReadSignal<Option<(u32, u32)>>,
    on_cancel: FC,
    on_save: FS,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send,
    FS: Fn(u64) + 'static + Clone + Send,
{
    view! {
        <div class="dialog-backdrop">
            <div class="dialog" role="dialog">
                <div class="dialog-header">"Select Number of Rows"</div>
                <div class="dialog-content">
                    <div class="input-number">
                        <span>"Select Rows:"</span>
                        <button
                            class="btn btn-small"
                            disabled=move || is_running.get() || row_count.get() == 0
                            on:click=move |_| row_count.update(|n| *n = n.saturating_sub(1))
                        >
                            "-"
                        </button>
                        <input
                            id="rows-to-select"
                            type="number"
                            min="0"
                            placeholder="Enter number"
                            prop:value=move || row_count.get().to_string()
                            on:input=move |ev| row_count.set(parse_row_count(&event_target_value(&ev)))
                        />
                        <button
                            class="btn btn-small"
                            disabled=move || is_running.get()
                            on:click=move |_| row_count.update(|n| *n = n.saturating_add(1))
                        >
                            "+"
                        </button>
                    </div>
                    <Show when=move || is_running.get()>
                        <p class="progress-text">
                            {move || match progress.get() {
                                Some((page, total)) => format!("取得中... {} / {}ページ", page + 1, total),
                                None => "取得中...".to_string(),
                            }}
                        </p>
                    </Show>
                </div>
                <div class="dialog-footer">
                    <button
                        class="btn btn-secondary"
                        disabled=move || is_running.get()
                        on:click={
                            let on_cancel = on_cancel.clone();
                            move |_| on_cancel(())
                        }
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=move || is_running.get()
                        on:click={
                            let on_save = on_save.clone();
                            move |_| on_save(row_count.get_untracked())
                        }
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
