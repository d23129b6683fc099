//! Route handlers for the streaming platform's guarded endpoints.
//!
//! Each handler guards its action, takes the resulting [`AccessGrant`], and
//! only then touches the resource. Persistence is out of scope here; the
//! handlers return what the endpoint would send back.

use serde::Serialize;

use crate::action::Action;
use crate::capability::AccessGrant;
use crate::error::{Violation, ViolationKind};
use crate::resource::ResourceContext;
use crate::role::Role;

use super::{guard, RequestAdapter};

/// Longest comment body accepted, in characters.
pub const MAX_COMMENT_CHARS: usize = 2_000;

/// A track as far as access checks are concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Track id
    pub id: String,
    /// Uploading artist's account id
    pub artist_id: String,
    /// Track is entered in a tournament or a free-tier promotion
    pub in_tournament: bool,
}

impl Track {
    /// Returns the resource context for this track.
    pub fn resource(&self) -> ResourceContext {
        ResourceContext::new()
            .owned_by(self.artist_id.clone())
            .with_promotional(self.in_tournament)
    }
}

/// Result of starting playback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackResult {
    /// Request ID for tracing
    pub request_id: String,
    /// Track being played
    pub track_id: String,
    /// Listener id, `None` for anonymous tournament listens
    pub listener_id: Option<String>,
}

/// Handles `POST /tracks/:id/play`.
///
/// # Examples
///
/// ```
/// use access_core::web::handlers::{handle_play_track, Track};
/// use access_core::web::RequestAdapter;
///
/// let track = Track {
///     id: "t-1".to_string(),
///     artist_id: "a-1".to_string(),
///     in_tournament: true,
/// };
///
/// let result = handle_play_track(&RequestAdapter::new("req-1"), &track).expect("tournament track");
/// assert!(result.listener_id.is_none());
/// ```
pub fn handle_play_track(
    adapter: &RequestAdapter,
    track: &Track,
) -> Result<PlaybackResult, Violation> {
    let ctx = guard(adapter, Action::Listen, track.resource())?;
    let grant = ctx.grant(Action::Listen)?;

    ctx.log()
        .debug(format_args!("starting playback of {}", track.id));

    Ok(PlaybackResult {
        request_id: ctx.request_id().to_string(),
        track_id: open_stream(grant, track),
        listener_id: ctx.principal().id().map(str::to_string),
    })
}

fn open_stream(_grant: AccessGrant, track: &Track) -> String {
    track.id.clone()
}

/// Result of a download request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResult {
    /// Request ID for tracing
    pub request_id: String,
    /// File name offered to the client
    pub file_name: String,
}

/// Handles `GET /tracks/:id/download`.
pub fn handle_download_track(
    adapter: &RequestAdapter,
    track: &Track,
) -> Result<DownloadResult, Violation> {
    let ctx = guard(adapter, Action::Download, track.resource())?;
    let grant = ctx.grant(Action::Download)?;

    ctx.log().info(format_args!("download of {}", track.id));

    Ok(DownloadResult {
        request_id: ctx.request_id().to_string(),
        file_name: download_name(grant, track),
    })
}

fn download_name(_grant: AccessGrant, track: &Track) -> String {
    format!("{}.mp3", track.id)
}

/// Result of posting a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResult {
    /// Request ID for tracing
    pub request_id: String,
    /// Commented track
    pub track_id: String,
    /// Comment author
    pub author_id: String,
    /// Stored comment text (trimmed)
    pub body: String,
}

/// Handles `POST /tracks/:id/comments`.
///
/// Access is checked before the body is looked at, so an anonymous caller
/// gets a sign-in response even for an invalid body.
pub fn handle_post_comment(
    adapter: &RequestAdapter,
    track: &Track,
    body: &str,
) -> Result<CommentResult, Violation> {
    let ctx = guard(adapter, Action::Comment, track.resource())?;
    let _grant = ctx.grant(Action::Comment)?;

    let body = body.trim();
    if body.is_empty() || body.chars().count() > MAX_COMMENT_CHARS {
        return Err(Violation::new(
            ViolationKind::InvalidInput,
            format!("Comment must be 1 to {} characters", MAX_COMMENT_CHARS),
        )
        .for_action(Action::Comment));
    }

    let author_id = ctx
        .principal()
        .id()
        .map(str::to_string)
        .ok_or_else(|| Violation::new(ViolationKind::SignInRequired, "Sign in to comment"))?;

    Ok(CommentResult {
        request_id: ctx.request_id().to_string(),
        track_id: track.id.clone(),
        author_id,
        body: body.to_string(),
    })
}

/// Result of entering a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentEntryResult {
    /// Request ID for tracing
    pub request_id: String,
    /// Tournament entered
    pub tournament_id: String,
    /// Entered track
    pub track_id: String,
}

/// Handles `POST /tournaments/:id/entries`.
///
/// Besides the role check, an artist can only enter tracks they uploaded;
/// administrators may enter any track.
pub fn handle_join_tournament(
    adapter: &RequestAdapter,
    tournament_id: &str,
    track: &Track,
) -> Result<TournamentEntryResult, Violation> {
    let ctx = guard(adapter, Action::JoinCompetition, track.resource())?;
    let _grant = ctx.grant(Action::JoinCompetition)?;

    let is_admin = ctx
        .principal()
        .account()
        .is_some_and(|a| a.has_role(Role::Admin));
    if !is_admin && ctx.principal().id() != Some(track.artist_id.as_str()) {
        return Err(Violation::new(
            ViolationKind::Denied,
            "Only the uploading artist can enter this track",
        )
        .for_action(Action::JoinCompetition));
    }

    ctx.log().info(format_args!(
        "track {} entered in tournament {}",
        track.id, tournament_id
    ));

    Ok(TournamentEntryResult {
        request_id: ctx.request_id().to_string(),
        tournament_id: tournament_id.to_string(),
        track_id: track.id.clone(),
    })
}

/// Result of creating a marketplace listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResult {
    /// Request ID for tracing
    pub request_id: String,
    /// Seller account id
    pub seller_id: String,
    /// Listing title
    pub title: String,
    /// Price in cents
    pub price_cents: u64,
}

/// Handles `POST /marketplace/listings`.
pub fn handle_list_product(
    adapter: &RequestAdapter,
    title: &str,
    price_cents: u64,
) -> Result<ListingResult, Violation> {
    let ctx = guard(adapter, Action::ListOnMarketplace, ResourceContext::new())?;
    let _grant = ctx.grant(Action::ListOnMarketplace)?;

    let title = title.trim();
    if title.is_empty() || price_cents == 0 {
        return Err(Violation::new(
            ViolationKind::InvalidInput,
            "Listing needs a title and a non-zero price",
        )
        .for_action(Action::ListOnMarketplace));
    }

    Ok(ListingResult {
        request_id: ctx.request_id().to_string(),
        seller_id: ctx.principal().id().unwrap_or_default().to_string(),
        title: title.to_string(),
        price_cents,
    })
}

/// Result of creating a boost campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResult {
    /// Request ID for tracing
    pub request_id: String,
    /// Promoted track
    pub track_id: String,
    /// Campaign owner
    pub marketer_id: String,
    /// Budget in cents
    pub budget_cents: u64,
}

/// Handles `POST /campaigns`.
pub fn handle_create_campaign(
    adapter: &RequestAdapter,
    track: &Track,
    budget_cents: u64,
) -> Result<CampaignResult, Violation> {
    // Campaign ownership is the marketer's, not the track artist's.
    let ctx = guard(adapter, Action::CreateCampaign, ResourceContext::new())?;
    let _grant = ctx.grant(Action::CreateCampaign)?;

    if budget_cents == 0 {
        return Err(Violation::new(
            ViolationKind::InvalidInput,
            "Campaign budget must be positive",
        )
        .for_action(Action::CreateCampaign));
    }

    Ok(CampaignResult {
        request_id: ctx.request_id().to_string(),
        track_id: track.id.clone(),
        marketer_id: ctx.principal().id().unwrap_or_default().to_string(),
        budget_cents,
    })
}
