use crate::formats::{ActivityRecord, Comment, FeaturedComment, Photo, PhotoRef};
use crate::score::score;

/// `explicit_highlight` when it has a photo, otherwise the best-scoring
/// activity with a photo (earliest wins ties).
pub fn select_featured<'a, I>(
    activities: I,
    explicit_highlight: Option<&'a ActivityRecord>,
) -> Option<&'a ActivityRecord>
where
    I: IntoIterator<Item = &'a ActivityRecord>,
{
    if let Some(explicit) = explicit_highlight
        && explicit.has_photos()
    {
        return Some(explicit);
    }

    activities
        .into_iter()
        .filter(|activity| activity.has_photos())
        .map(|activity| (score(activity), activity))
        .reduce(|best, candidate| if candidate.0 > best.0 { candidate } else { best })
        .map(|(_, activity)| activity)
}

pub fn top_photos<'a, I>(activities: I, max_photos: usize) -> Vec<PhotoRef>
where
    I: IntoIterator<Item = &'a ActivityRecord>,
{
    rank_by_score(activities)
        .into_iter()
        .filter_map(|(_, activity)| lead_photo(activity))
        .take(max_photos)
        .collect()
}

pub fn top_comments<'a, I>(activities: I, max_comments: usize) -> Vec<FeaturedComment>
where
    I: IntoIterator<Item = &'a ActivityRecord>,
{
    let mut flattened = activities
        .into_iter()
        .flat_map(|activity| {
            let parent_score = score(activity);
            activity
                .comments()
                .iter()
                .map(move |comment| (parent_score, activity.id, comment))
        })
        .collect::<Vec<_>>();

    flattened.sort_by(|(a_score, _, a), (b_score, _, b)| {
        b.reaction_count
            .cmp(&a.reaction_count)
            .then_with(|| b_score.cmp(a_score))
    });

    flattened
        .into_iter()
        .take(max_comments)
        .map(|(_, activity_id, comment)| FeaturedComment {
            activity_id,
            comment: comment.clone(),
        })
        .collect()
}

pub fn comments(activity: &ActivityRecord, max_comments: usize) -> Vec<Comment> {
    activity
        .comments()
        .iter()
        .take(max_comments)
        .cloned()
        .collect()
}

pub fn activity_photos(activity: &ActivityRecord, max_photos: usize) -> Vec<PhotoRef> {
    activity
        .photo_candidates()
        .filter_map(|photo| photo_ref(activity, photo))
        .take(max_photos)
        .collect()
}

pub fn hero_photo(activity: &ActivityRecord) -> Option<PhotoRef> {
    activity
        .photo_candidates()
        .filter_map(|photo| photo_ref(activity, photo))
        .reduce(|best, candidate| {
            if candidate.resolution > best.resolution {
                candidate
            } else {
                best
            }
        })
}

fn lead_photo(activity: &ActivityRecord) -> Option<PhotoRef> {
    activity
        .photo_candidates()
        .find_map(|photo| photo_ref(activity, photo))
}

fn photo_ref(activity: &ActivityRecord, photo: &Photo) -> Option<PhotoRef> {
    let (resolution, url) = photo.largest()?;
    Some(PhotoRef {
        activity_id: activity.id,
        url: url.to_owned(),
        resolution,
    })
}

fn rank_by_score<'a, I>(activities: I) -> Vec<(i32, &'a ActivityRecord)>
where
    I: IntoIterator<Item = &'a ActivityRecord>,
{
    let mut ranked = activities
        .into_iter()
        .map(|activity| (score(activity), activity))
        .collect::<Vec<_>>();
    ranked.sort_by(|(a, _), (b, _)| b.cmp(a));
    ranked
}
