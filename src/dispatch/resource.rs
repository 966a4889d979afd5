use std::fmt::{self, Display};

/// The resource kinds the router knows by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    User,
    Category,
    Post,
    Comment,
    Pokemon,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        Self::User,
        Self::Category,
        Self::Post,
        Self::Comment,
        Self::Pokemon,
    ];

    /// Display name used in messages and template names.
    pub fn name(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Category => "Category",
            Self::Post => "Post",
            Self::Comment => "Comment",
            Self::Pokemon => "Pokemon",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Self::User => "Users",
            Self::Category => "Categories",
            Self::Post => "Posts",
            Self::Comment => "Comments",
            Self::Pokemon => "Pokemon",
        }
    }

    /// The first path segment routed to this resource.
    pub fn path(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Category => "category",
            Self::Post => "post",
            Self::Comment => "comment",
            Self::Pokemon => "pokemon",
        }
    }

    /// Body fields a create form submits, in the order they are validated.
    pub fn form_fields(self) -> &'static [&'static str] {
        match self {
            Self::User => &["username", "email", "password"],
            Self::Category => &["userId", "title", "description"],
            Self::Post => &["userId", "categoryId", "title", "type", "content"],
            Self::Comment => &["postId", "userId", "content", "replyId"],
            Self::Pokemon => &["name", "type"],
        }
    }

    /// `User` + `ShowView` gives `User/ShowView`.
    pub fn view(self, view: &str) -> String {
        format!("{}/{view}", self.name())
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
