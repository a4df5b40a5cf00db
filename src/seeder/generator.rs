use crate::model::SeedPerson;
use crate::seeder::data::{CITIES, EMAIL_DOMAINS, NAMES, NO_INTERNET, PROVIDERS, Weighted, plans_for};
use crate::utils::{chrono_to_bson, slugify};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;

/// Picks a candidate with probability proportional to its weight.
///
/// Draws `r` in `[0, total)` and subtracts weights in list order until `r`
/// drops to zero or below. Float rounding can leave `r` slightly positive
/// after the last subtraction, in which case the last candidate is returned.
pub fn weighted_choice<'a, R: Rng + ?Sized>(rng: &mut R, options: &'a [Weighted]) -> Option<&'a str> {
    let last = options.last()?;
    let total: f64 = options.iter().map(|o| o.weight).sum();
    let mut r = rng.random::<f64>() * total;

    for option in options {
        r -= option.weight;
        if r <= 0.0 {
            return Some(option.name);
        }
    }
    Some(last.name)
}

pub fn build_plan<R: Rng + ?Sized>(rng: &mut R, provider: &str) -> String {
    plans_for(provider)
        .choose(rng)
        .copied()
        .unwrap_or("—")
        .to_string()
}

/// `(DD) 9XXXX-XXXX`
pub fn build_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    let ddd = rng.random_range(11..=99);
    let prefix = rng.random_range(90000..=99999);
    let suffix = rng.random_range(1000..=9999);
    format!("({}) {}-{}", ddd, prefix, suffix)
}

pub fn build_email<R: Rng + ?Sized>(rng: &mut R, name: &str) -> String {
    let mut slug = slugify(name);
    if slug.is_empty() {
        slug = format!("usuario{}", rng.random_range(1000..=9999));
    }
    let domain = EMAIL_DOMAINS.choose(rng).copied().unwrap_or("mail.com");
    format!("{}@{}", slug, domain)
}

/// People without internet are reached by phone, everyone else by email.
pub fn build_contact<R: Rng + ?Sized>(rng: &mut R, provider: &str, name: &str) -> String {
    if provider == NO_INTERNET {
        build_phone(rng)
    } else {
        build_email(rng, name)
    }
}

/// A whole-day offset of up to `months * 30` days before `now`.
pub fn random_date_in_past<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>, months: i64) -> DateTime<Utc> {
    let days = rng.random_range(0..=months * 30);
    now - Duration::days(days)
}

pub fn generate_person<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> SeedPerson {
    let nome = NAMES.choose(rng).copied().unwrap_or("Pessoa");
    let provider = weighted_choice(rng, PROVIDERS).unwrap_or(NO_INTERNET);
    let stamped_now = chrono_to_bson(now);

    SeedPerson {
        nome: nome.to_string(),
        idade: rng.random_range(18..=65),
        internet: provider.to_string(),
        provedora: provider.to_string(),
        plano: build_plan(rng, provider),
        contato: build_contact(rng, provider, nome),
        cidade: CITIES.choose(rng).copied().unwrap_or_default().to_string(),
        localizacao: CITIES.choose(rng).copied().unwrap_or_default().to_string(),
        atualizado_em: chrono_to_bson(random_date_in_past(rng, now, 12)),
        created_at: stamped_now,
        updated_at: stamped_now,
    }
}

pub fn generate_people<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<SeedPerson> {
    (0..count).map(|_| generate_person(rng, now)).collect()
}

/// Provider counts ordered by descending count, ties broken by name.
pub fn provider_distribution(people: &[SeedPerson]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for person in people {
        *counts.entry(person.internet.as_str()).or_insert(0) += 1;
    }

    let mut distribution: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(provider, count)| (provider.to_string(), count))
        .collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use regex::Regex;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(41)
    }

    #[test]
    fn weighted_choice_converges_to_weights() {
        let mut rng = rng();
        let samples = 100_000;
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..samples {
            let pick = weighted_choice(&mut rng, PROVIDERS).unwrap();
            *counts.entry(pick).or_default() += 1;
        }

        let total: f64 = PROVIDERS.iter().map(|p| p.weight).sum();
        assert_eq!(total, 41.0);
        for provider in PROVIDERS {
            let expected = provider.weight / total;
            let observed = counts.get(provider.name).copied().unwrap_or(0) as f64 / samples as f64;
            assert!(
                (observed - expected).abs() < 0.01,
                "{}: observed {:.4}, expected {:.4}",
                provider.name,
                observed,
                expected
            );
        }
    }

    #[test]
    fn weighted_choice_empty_is_none() {
        let none: [Weighted; 0] = [];
        assert_eq!(weighted_choice(&mut rng(), &none), None);
    }

    #[test]
    fn weighted_choice_single_candidate() {
        let only = [Weighted { name: "Vivo", weight: 2.5 }];
        for _ in 0..100 {
            assert_eq!(weighted_choice(&mut rng(), &only), Some("Vivo"));
        }
    }

    #[test]
    fn generates_exact_count_with_consistent_plans() {
        let people = generate_people(&mut rng(), 60, Utc::now());
        assert_eq!(people.len(), 60);
        for person in &people {
            assert_eq!(person.internet, person.provedora);
            assert!(
                plans_for(&person.provedora).contains(&person.plano.as_str()),
                "{} is not sold by {}",
                person.plano,
                person.provedora
            );
            assert!((18..=65).contains(&person.idade));
            assert_eq!(person.created_at, person.updated_at);
        }
    }

    #[test]
    fn contact_shape_follows_provider() {
        let phone = Regex::new(r"^\(\d{2}\) 9\d{4}-\d{4}$").unwrap();
        let email = Regex::new(r"^[a-z.]+@[a-z.]+$").unwrap();

        for person in generate_people(&mut rng(), 500, Utc::now()) {
            if person.provedora == NO_INTERNET {
                assert!(phone.is_match(&person.contato), "bad phone {}", person.contato);
            } else {
                assert!(email.is_match(&person.contato), "bad email {}", person.contato);
            }
        }
    }

    #[test]
    fn email_falls_back_when_name_has_no_letters() {
        let email = build_email(&mut rng(), "42");
        let user = Regex::new(r"^usuario\d{4}@").unwrap();
        assert!(user.is_match(&email), "{email}");
    }

    #[test]
    fn past_dates_stay_within_a_year() {
        let now = Utc::now();
        let mut rng = rng();
        for _ in 0..1000 {
            let date = random_date_in_past(&mut rng, now, 12);
            assert!(date <= now);
            assert!(now - date <= Duration::days(360));
        }
    }

    #[test]
    fn distribution_is_sorted_descending() {
        let people = generate_people(&mut rng(), 200, Utc::now());
        let distribution = provider_distribution(&people);
        assert_eq!(distribution.iter().map(|(_, c)| c).sum::<usize>(), 200);
        assert!(distribution.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}
