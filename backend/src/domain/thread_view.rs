//! # Thread View Service
//!
//! Pure projection of the forum's post tree into view models. Relative
//! ages are resolved against a caller-supplied clock so rendering the same
//! snapshot at the same instant is deterministic.

use shared::{Comment, CommentView, ForumPost, PostView, Reply, ReplyView};

use crate::domain::dates;

#[derive(Clone)]
pub struct ThreadViewService;

impl ThreadViewService {
    pub fn new() -> Self {
        Self
    }

    pub fn posts_view(&self, posts: &[ForumPost], now_ms: i64) -> Vec<PostView> {
        posts.iter().map(|post| self.post_view(post, now_ms)).collect()
    }

    pub fn post_view(&self, post: &ForumPost, now_ms: i64) -> PostView {
        PostView {
            id: post.id,
            title: post.title.clone(),
            author: post.author.clone(),
            content: post.content.clone(),
            relative_age: dates::relative_age(post.timestamp, now_ms),
            likes: post.likes,
            comment_count: post.comments.len(),
            comments: post
                .comments
                .iter()
                .map(|c| comment_view(c, now_ms))
                .collect(),
        }
    }
}

impl Default for ThreadViewService {
    fn default() -> Self {
        Self::new()
    }
}

fn comment_view(comment: &Comment, now_ms: i64) -> CommentView {
    CommentView {
        id: comment.id,
        author: comment.author.clone(),
        content: comment.content.clone(),
        relative_age: dates::relative_age(comment.timestamp, now_ms),
        likes: comment.likes,
        replies: comment.replies.iter().map(|r| reply_view(r, now_ms)).collect(),
    }
}

fn reply_view(reply: &Reply, now_ms: i64) -> ReplyView {
    ReplyView {
        id: reply.id,
        author: reply.author.clone(),
        content: reply.content.clone(),
        relative_age: dates::relative_age(reply.timestamp, now_ms),
        likes: reply.likes,
    }
}
