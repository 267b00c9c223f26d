//! ページをまたいだ選択状態
//!
//! 選択は作品IDだけで管理する。どのページに表示されているか、
//! 表の何行目かには依存しない。

use crate::types::RecordId;
use std::collections::BTreeSet;

/// 選択中の作品IDの集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    ids: BTreeSet<RecordId>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 選択中なら外し、未選択なら選択する
    pub fn toggle(&mut self, id: RecordId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// 和集合を取る（何度呼んでも同じ結果）
    pub fn add_many<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = RecordId>,
    {
        self.ids.extend(ids);
    }

    /// 差集合を取る（表示中ページの全解除に使う）
    pub fn remove_many<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = RecordId>,
    {
        for id in ids {
            self.ids.remove(&id);
        }
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    /// すべて選択中か。空の場合は true
    pub fn are_all_selected<I>(&self, ids: I) -> bool
    where
        I: IntoIterator<Item = RecordId>,
    {
        ids.into_iter().all(|id| self.ids.contains(&id))
    }

    /// 表示中の行をまとめて切り替える（ヘッダーのチェックボックス）
    ///
    /// すべて選択済みなら全解除、そうでなければ全選択。
    ///
    /// # Returns
    /// 操作後にすべて選択されているか
    pub fn toggle_all(&mut self, ids: &[RecordId]) -> bool {
        if self.are_all_selected(ids.iter().copied()) {
            self.remove_many(ids.iter().copied());
            false
        } else {
            self.add_many(ids.iter().copied());
            true
        }
    }

    /// 集合全体を1回の代入で置き換える
    pub fn replace(&mut self, other: SelectionStore) {
        *self = other;
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// ID昇順
    pub fn iter(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<RecordId> for SelectionStore {
    fn from_iter<I: IntoIterator<Item = RecordId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
