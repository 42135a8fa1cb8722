//! # Forum Service
//!
//! Store over the post tree. Posts own their comments, comments own their
//! replies. Every mutation, likes included, persists the whole forum.

use anyhow::Result;
use shared::{Comment, ForumData, ForumPost, Reply};
use tracing::info;

use crate::domain::commands::{
    AddCommentCommand, AddReplyCommand, CreatePostCommand, CreatePostResponse, PostQuery,
};
use crate::domain::ids::IdGenerator;
use crate::storage::traits::ForumStorage;

#[derive(Clone)]
pub struct ForumService<S: ForumStorage + Clone> {
    repository: S,
    ids: IdGenerator,
}

impl<S: ForumStorage + Clone> ForumService<S> {
    pub fn new(repository: S, ids: IdGenerator) -> Self {
        Self { repository, ids }
    }

    pub fn forum_data(&self) -> Result<ForumData> {
        self.repository.load_forum()
    }

    /// Remove all stored forum data. A later `ensure_seeded` call restores
    /// the starter posts.
    pub fn clear(&self) -> Result<()> {
        self.repository.clear_forum()
    }

    /// Seed the starter posts when the forum is empty, so a fresh install
    /// is not a blank page.
    pub fn ensure_seeded(&self) -> Result<()> {
        let forum = self.repository.load_forum()?;
        if !forum.posts.is_empty() {
            return Ok(());
        }

        info!("Forum is empty; seeding starter posts");
        let seeded = self.starter_posts();
        self.repository.save_forum(&seeded)
    }

    fn starter_posts(&self) -> ForumData {
        let now = crate::domain::dates::now_ms();
        ForumData {
            posts: vec![
                ForumPost {
                    id: self.ids.next_id(),
                    title: "First Time Mom Tips".to_string(),
                    content: "Hi everyone! I'm a first-time mom and would love to hear your \
                              tips for managing sleep schedules and feeding routines. What \
                              worked best for you?"
                        .to_string(),
                    author: "Sarah M.".to_string(),
                    timestamp: now - 3_600_000,
                    likes: 15,
                    comments: vec![Comment {
                        id: self.ids.next_id(),
                        author: "Emma R.".to_string(),
                        content: "Welcome to motherhood! I found that establishing a \
                                  consistent bedtime routine really helped. Bath, book, and \
                                  bed at the same time every night."
                            .to_string(),
                        timestamp: now - 1_800_000,
                        likes: 8,
                        replies: vec![],
                    }],
                },
                ForumPost {
                    id: self.ids.next_id(),
                    title: "Fun Activities for 2-Year-Olds".to_string(),
                    content: "Looking for creative indoor activities to keep my energetic \
                              2-year-old engaged. Any suggestions for educational and fun \
                              games?"
                        .to_string(),
                    author: "Lisa K.".to_string(),
                    timestamp: now - 7_200_000,
                    likes: 12,
                    comments: vec![Comment {
                        id: self.ids.next_id(),
                        author: "Maria T.".to_string(),
                        content: "We love doing simple crafts with paper plates and washable \
                                  markers. Also, building forts with blankets is always a \
                                  hit!"
                            .to_string(),
                        timestamp: now - 3_600_000,
                        likes: 5,
                        replies: vec![],
                    }],
                },
            ],
        }
    }

    /// New posts go to the front of the list.
    pub fn create_post(&self, command: CreatePostCommand) -> Result<CreatePostResponse> {
        let post = ForumPost {
            id: self.ids.next_id(),
            title: command.title,
            content: command.content,
            author: command.author,
            timestamp: crate::domain::dates::now_ms(),
            likes: 0,
            comments: vec![],
        };
        info!("Creating forum post: {}", post.title);

        let mut forum = self.repository.load_forum()?;
        forum.posts.insert(0, post.clone());
        self.repository.save_forum(&forum)?;

        Ok(CreatePostResponse {
            success_message: "Post created successfully!".to_string(),
            post,
        })
    }

    pub fn add_comment(&self, command: AddCommentCommand) -> Result<Comment> {
        let mut forum = self.repository.load_forum()?;
        let post = forum
            .posts
            .iter_mut()
            .find(|p| p.id == command.post_id)
            .ok_or_else(|| anyhow::anyhow!("No post found with id {}", command.post_id))?;

        let comment = Comment {
            id: self.ids.next_id(),
            author: command.author,
            content: command.content,
            timestamp: crate::domain::dates::now_ms(),
            likes: 0,
            replies: vec![],
        };
        post.comments.push(comment.clone());

        self.repository.save_forum(&forum)?;
        Ok(comment)
    }

    pub fn add_reply(&self, command: AddReplyCommand) -> Result<Reply> {
        let mut forum = self.repository.load_forum()?;
        let comment = find_comment(&mut forum, command.post_id, command.comment_id)?;

        let reply = Reply {
            id: self.ids.next_id(),
            author: command.author,
            content: command.content,
            timestamp: crate::domain::dates::now_ms(),
            likes: 0,
        };
        comment.replies.push(reply.clone());

        self.repository.save_forum(&forum)?;
        Ok(reply)
    }

    /// Returns the new like count.
    pub fn like_post(&self, post_id: i64) -> Result<u32> {
        let mut forum = self.repository.load_forum()?;
        let post = forum
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| anyhow::anyhow!("No post found with id {}", post_id))?;

        post.likes += 1;
        let likes = post.likes;
        self.repository.save_forum(&forum)?;
        Ok(likes)
    }

    pub fn like_comment(&self, post_id: i64, comment_id: i64) -> Result<u32> {
        let mut forum = self.repository.load_forum()?;
        let comment = find_comment(&mut forum, post_id, comment_id)?;

        comment.likes += 1;
        let likes = comment.likes;
        self.repository.save_forum(&forum)?;
        Ok(likes)
    }

    pub fn like_reply(&self, post_id: i64, comment_id: i64, reply_id: i64) -> Result<u32> {
        let mut forum = self.repository.load_forum()?;
        let comment = find_comment(&mut forum, post_id, comment_id)?;
        let reply = comment
            .replies
            .iter_mut()
            .find(|r| r.id == reply_id)
            .ok_or_else(|| anyhow::anyhow!("No reply found with id {}", reply_id))?;

        reply.likes += 1;
        let likes = reply.likes;
        self.repository.save_forum(&forum)?;
        Ok(likes)
    }

    /// Derived view: posts matching the query, in stored order. The search
    /// is a case-insensitive match on title, content, or any comment.
    pub fn list_posts(&self, query: PostQuery) -> Result<Vec<ForumPost>> {
        let forum = self.repository.load_forum()?;

        let Some(search) = query.search.filter(|s| !s.trim().is_empty()) else {
            return Ok(forum.posts);
        };
        let needle = search.to_lowercase();

        Ok(forum
            .posts
            .into_iter()
            .filter(|post| {
                post.title.to_lowercase().contains(&needle)
                    || post.content.to_lowercase().contains(&needle)
                    || post
                        .comments
                        .iter()
                        .any(|c| c.content.to_lowercase().contains(&needle))
            })
            .collect())
    }
}

fn find_comment<'a>(
    forum: &'a mut ForumData,
    post_id: i64,
    comment_id: i64,
) -> Result<&'a mut Comment> {
    let post = forum
        .posts
        .iter_mut()
        .find(|p| p.id == post_id)
        .ok_or_else(|| anyhow::anyhow!("No post found with id {}", post_id))?;
    post.comments
        .iter_mut()
        .find(|c| c.id == comment_id)
        .ok_or_else(|| anyhow::anyhow!("No comment found with id {}", comment_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::{ForumRepository, JsonConnection};
    use crate::storage::traits::ForumStorage;
    use tempfile::TempDir;

    fn test_service() -> (ForumService<ForumRepository>, ForumRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let repository = ForumRepository::new(JsonConnection::new(temp_dir.path()));
        (
            ForumService::new(repository.clone(), IdGenerator::new()),
            repository,
            temp_dir,
        )
    }

    #[test]
    fn seeding_only_happens_once() {
        let (service, _repository, _dir) = test_service();
        service.ensure_seeded().unwrap();
        let posts = service.list_posts(PostQuery::default()).unwrap();
        assert_eq!(posts.len(), 2);

        service.ensure_seeded().unwrap();
        assert_eq!(service.list_posts(PostQuery::default()).unwrap().len(), 2);
    }

    #[test]
    fn new_posts_go_to_the_front() {
        let (service, _repository, _dir) = test_service();
        service.ensure_seeded().unwrap();

        service
            .create_post(CreatePostCommand {
                title: "Picky eater help".to_string(),
                content: "Any tips for toddlers who refuse vegetables?".to_string(),
                author: "Jo P.".to_string(),
            })
            .unwrap();

        let posts = service.list_posts(PostQuery::default()).unwrap();
        assert_eq!(posts[0].title, "Picky eater help");
    }

    #[test]
    fn every_mutation_is_persisted() {
        let (service, repository, _dir) = test_service();
        let post = service
            .create_post(CreatePostCommand {
                title: "Nap schedules".to_string(),
                content: "How many naps at 18 months?".to_string(),
                author: "Jo P.".to_string(),
            })
            .unwrap()
            .post;

        service.like_post(post.id).unwrap();
        let comment = service
            .add_comment(AddCommentCommand {
                post_id: post.id,
                author: "Kim W.".to_string(),
                content: "We went down to one around then.".to_string(),
            })
            .unwrap();
        service
            .add_reply(AddReplyCommand {
                post_id: post.id,
                comment_id: comment.id,
                author: "Jo P.".to_string(),
                content: "Thanks, trying that!".to_string(),
            })
            .unwrap();
        service.like_comment(post.id, comment.id).unwrap();

        // Reload straight from storage to prove nothing lived only in memory.
        let stored = repository.load_forum().unwrap();
        assert_eq!(stored.posts[0].likes, 1);
        assert_eq!(stored.posts[0].comments.len(), 1);
        assert_eq!(stored.posts[0].comments[0].likes, 1);
        assert_eq!(stored.posts[0].comments[0].replies.len(), 1);
    }

    #[test]
    fn search_matches_comment_text_too() {
        let (service, _repository, _dir) = test_service();
        service.ensure_seeded().unwrap();

        let posts = service
            .list_posts(PostQuery {
                search: Some("BEDTIME".to_string()),
            })
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "First Time Mom Tips");
    }

    #[test]
    fn commenting_on_a_missing_post_fails() {
        let (service, _repository, _dir) = test_service();
        let result = service.add_comment(AddCommentCommand {
            post_id: 404,
            author: "Jo P.".to_string(),
            content: "hello?".to_string(),
        });
        assert!(result.is_err());
    }
}
