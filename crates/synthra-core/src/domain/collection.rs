//! Operations over an in-memory post collection (most recent first).

use super::Post;

/// Place `post` at the head of the collection.
pub fn insert_front(mut posts: Vec<Post>, post: Post) -> Vec<Post> {
    posts.insert(0, post);
    posts
}

/// Drop every post with the given id. Unknown ids leave the collection as is.
pub fn remove_by_id(mut posts: Vec<Post>, id: &str) -> Vec<Post> {
    posts.retain(|post| post.id != id);
    posts
}

pub fn find_by_id<'a>(posts: &'a [Post], id: &str) -> Option<&'a Post> {
    posts.iter().find(|post| post.id == id)
}

pub fn contains_id(posts: &[Post], id: &str) -> bool {
    find_by_id(posts, id).is_some()
}
