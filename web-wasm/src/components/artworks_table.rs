//! 作品テーブルコンポーネント
//!
//! 選択列・タイトル・制作地・作者・銘文・開始年・終了年

use artworks_common::{PaginationController, Record, RecordId, SelectionStore};
use leptos::prelude::*;

#[component]
pub fn ArtworksTable<FO>(
    controller: RwSignal<PaginationController>,
    selection: RwSignal<SelectionStore>,
    on_open_dialog: FO,
) -> impl IntoView
where
    FO: Fn(()) + 'static + Clone + Send,
{
    let all_visible_selected = move || {
        let visible = controller.with(|c| c.visible_ids());
        selection.with(|s| s.are_all_selected(visible))
    };

    view! {
        <div class="datatable">
            <div class="table-header">
                <h5>"Artworks"</h5>
                <Show when=move || controller.with(|c| c.is_loading())>
                    <span class="loading">"読み込み中..."</span>
                </Show>
            </div>
            <table>
                <thead>
                    <tr>
                        <th class="select-column">
                            <div class="header-checkbox-container">
                                <input
                                    type="checkbox"
                                    class="select-all-checkbox"
                                    id="select-all"
                                    prop:checked=all_visible_selected
                                    on:change=move |_| {
                                        let visible = controller.with_untracked(|c| c.visible_ids());
                                        selection.update(|s| {
                                            s.toggle_all(&visible);
                                        });
                                    }
                                />
                                <button
                                    class="select-all-icon"
                                    title="件数を指定して選択"
                                    on:click={
                                        let on_open_dialog = on_open_dialog.clone();
                                        move |_| on_open_dialog(())
                                    }
                                >
                                    "▾"
                                </button>
                            </div>
                        </th>
                        <th>"Title"</th>
                        <th>"Place of Origin"</th>
                        <th>"Artist Display"</th>
                        <th>"Inscriptions"</th>
                        <th>"Start Date"</th>
                        <th>"End Date"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || controller.with(|c| c.records().to_vec())
                        key=|record| record.id
                        children=move |record| view! { <ArtworkRow record=record selection=selection /> }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ArtworkRow(record: Record, selection: RwSignal<SelectionStore>) -> impl IntoView {
    let id: RecordId = record.id;
    let is_selected = move || selection.with(|s| s.is_selected(id));

    view! {
        <tr class:selected=is_selected>
            <td class="select-column">
                <input
                    type="checkbox"
                    prop:checked=is_selected
                    on:change=move |_| selection.update(|s| s.toggle(id))
                />
            </td>
            <td>{record.title}</td>
            <td>{record.place_of_origin}</td>
            <td class="artist">{record.artist_display}</td>
            <td>{record.inscriptions}</td>
            <td class="year">{record.date_start}</td>
            <td class="year">{record.date_end}</td>
        </tr>
    }
}
