mod audio;
mod card;
mod ids;
mod podcast;
mod progress;
mod study_set;

pub use audio::{AudioBuffer, SampleRate};
pub use card::{Flashcard, SrsState};
pub use ids::{CardId, SetId, UserId};
pub use podcast::{GeneratedPodcast, PodcastConfig, PodcastLength, PodcastTone};
pub use progress::{
    UserProgress, XP_PER_DOCUMENT, XP_PER_QUIZ_POINT, XP_SESSION_COMPLETE,
};
pub use study_set::{QuizQuestion, StudySet};
