//! Notifications, matches and conversations shown on the notification page.

use std::rc::Rc;

use futures::stream::{FuturesUnordered, StreamExt};
use yew::Reducible;

use crate::api::{MatchPage, NotificationRecord, ProfileBackend, ProfileSummary};
use crate::error::ApiError;
use crate::principal::Principal;

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationItem {
    pub record: NotificationRecord,
    pub sender: ProfileSummary,
}

impl NotificationItem {
    pub fn text(&self) -> String {
        self.record.describe(self.sender.display_name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedAction {
    /// `pending` top-level fetches were issued.
    Started { pending: usize },
    /// No usable principal; nothing is fetched.
    SignedOut,
    NotificationsLoaded(Vec<NotificationRecord>),
    NotificationsFailed(ApiError),
    SenderLoaded(NotificationRecord, ProfileSummary),
    SenderFailed(NotificationRecord, ApiError),
    MatchesLoaded(MatchPage),
    MatchesFailed(ApiError),
}

impl FeedAction {
    /// The failure carried by this action, for logging.
    pub fn failure(&self) -> Option<&ApiError> {
        match self {
            FeedAction::NotificationsFailed(e)
            | FeedAction::SenderFailed(_, e)
            | FeedAction::MatchesFailed(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    /// In completion order of the sender lookups.
    pub notifications: Vec<NotificationItem>,
    pub matches: Vec<ProfileSummary>,
    pub total_matches: usize,
    pub signed_out: bool,
    pending: usize,
}

impl FeedState {
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    fn settle(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    pub fn apply(&mut self, action: FeedAction) {
        match action {
            FeedAction::Started { pending } => {
                *self = FeedState { pending, ..FeedState::default() };
            }
            FeedAction::SignedOut => {
                *self = FeedState { signed_out: true, ..FeedState::default() };
            }
            // Each sender lookup plus the matches fetch are now outstanding.
            FeedAction::NotificationsLoaded(list) => {
                self.pending += list.len() + 1;
                self.settle();
            }
            FeedAction::SenderLoaded(record, sender) => {
                self.notifications.push(NotificationItem { record, sender });
                self.settle();
            }
            FeedAction::MatchesLoaded(page) => {
                self.total_matches = page.total_matches;
                self.matches = page.profiles;
                self.settle();
            }
            FeedAction::NotificationsFailed(_)
            | FeedAction::SenderFailed(..)
            | FeedAction::MatchesFailed(_) => self.settle(),
        }
    }
}

impl Reducible for FeedState {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Fetches notifications, then each sender's profile and the first page of
/// matches, reporting every result through `dispatch` as it arrives.
///
/// Sender lookups and the matches fetch run concurrently; senders are
/// reported in completion order. When the notification fetch fails nothing
/// else is requested.
pub async fn load_feed<B, F>(
    backend: &B,
    principal: Option<Principal>,
    match_owner: Option<String>,
    page_size: usize,
    dispatch: F,
) where
    B: ProfileBackend,
    F: Fn(FeedAction),
{
    let Some(principal) = principal else {
        dispatch(FeedAction::SignedOut);
        return;
    };
    let owner = match_owner.unwrap_or_else(|| principal.to_string());
    let dispatch = &dispatch;

    dispatch(FeedAction::Started { pending: 1 });

    let list = match backend.retrieve_notifications_for_user(&principal).await {
        Ok(list) => list,
        Err(e) => {
            dispatch(FeedAction::NotificationsFailed(e));
            return;
        }
    };
    dispatch(FeedAction::NotificationsLoaded(list.clone()));

    let senders = async {
        let mut lookups: FuturesUnordered<_> = list
            .into_iter()
            .map(|record| async move {
                let sender = backend.get_profile(&record.sender_id).await;
                (record, sender)
            })
            .collect();
        while let Some((record, sender)) = lookups.next().await {
            dispatch(match sender {
                Ok(profile) => FeedAction::SenderLoaded(record, profile),
                Err(e) => FeedAction::SenderFailed(record, e),
            });
        }
    };

    let matches = async {
        match backend.get_rightswiped_matches(&owner, 1, page_size).await {
            Ok(page) => dispatch(FeedAction::MatchesLoaded(page)),
            Err(e) => dispatch(FeedAction::MatchesFailed(e)),
        }
    };

    futures::join!(senders, matches);
}
