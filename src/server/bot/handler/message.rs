use serenity::all::{Context, CreateEmbed, CreateMessage, Message, MessageType};
use std::time::Instant;

use crate::server::{
    bot::{
        command::{self, Command},
        embed,
        handler::Handler,
        trigger,
    },
    error::command::CommandError,
    model::pet::IngestContext,
    service::extract::extract,
    util::text::strip_lossless_quality,
};

/// Handle message creation in a channel
///
/// Postings in pet value channels are ingested first, so a command in the same
/// message already sees the update. Commands and the trigger only run for
/// messages sent by people.
pub async fn handle_message(handler: &Handler, ctx: Context, message: Message) {
    // Only handle messages in guild channels (not DMs)
    if message.guild_id.is_none() {
        return;
    }

    let channel_id = message.channel_id.get();
    let is_system = is_system_message(&message);

    if handler.settings.is_pet_value_channel(channel_id) {
        ingest_postings(handler, &message, is_system).await;
    }

    if is_system {
        return;
    }

    match Command::parse(&message.content) {
        Ok(Some(parsed)) => {
            tracing::debug!("Running {:?} for {}", parsed, message.author.name);
            let reply_embed = command::execute(parsed, &handler.catalog).await;
            reply(&ctx, &message, reply_embed).await;
        }
        Ok(None) => {}
        Err(CommandError::Usage(usage)) => {
            reply(&ctx, &message, embed::error("Invalid Usage", usage)).await;
        }
    }

    if handler.settings.is_trigger_channel(channel_id)
        && trigger::is_trigger(&message.content)
        && handler.cooldown.should_react(channel_id, Instant::now()).await
    {
        trigger::add_reactions(&ctx, &message).await;
    }
}

/// Messages from bots (webhooks included) and non-chat messages are system messages.
fn is_system_message(message: &Message) -> bool {
    message.author.bot || !matches!(message.kind, MessageType::Regular | MessageType::InlineReply)
}

async fn ingest_postings(handler: &Handler, message: &Message, is_system: bool) {
    let candidates = extract(&message.content, is_system);
    if candidates.is_empty() {
        return;
    }

    let context = IngestContext {
        message_id: Some(message.id.to_string()),
        attachment_image: single_image(message_image_urls(message)),
        timestamp: message.timestamp.to_utc(),
    };

    match handler.catalog.ingest(candidates, &context).await {
        Ok(records) => tracing::info!(
            "Updated {} pets from message {} in channel {}",
            records.len(),
            message.id,
            message.channel_id
        ),
        Err(e) => tracing::error!(
            "Failed to ingest pet values from message {}: {}",
            message.id,
            e
        ),
    }
}

/// Image attachments plus embed images and thumbnails of a message.
fn message_image_urls(message: &Message) -> Vec<String> {
    let attachments = message
        .attachments
        .iter()
        .filter(|attachment| {
            attachment
                .content_type
                .as_deref()
                .is_some_and(|content_type| content_type.starts_with("image/"))
        })
        .map(|attachment| attachment.url.clone());

    let embeds = message.embeds.iter().flat_map(|embed| {
        embed
            .image
            .as_ref()
            .map(|image| image.url.clone())
            .into_iter()
            .chain(embed.thumbnail.as_ref().map(|thumbnail| thumbnail.url.clone()))
    });

    attachments.chain(embeds).collect()
}

/// The message's image, only when it has exactly one.
fn single_image(urls: Vec<String>) -> Option<String> {
    match urls.as_slice() {
        [url] => Some(strip_lossless_quality(url)),
        _ => None,
    }
}

async fn reply(ctx: &Context, message: &Message, embed: CreateEmbed) {
    let builder = CreateMessage::new().embed(embed).reference_message(message);

    if let Err(e) = message.channel_id.send_message(&ctx.http, builder).await {
        tracing::error!(
            "Failed to reply to message {} in channel {}: {}",
            message.id,
            message.channel_id,
            e
        );
    }
}
