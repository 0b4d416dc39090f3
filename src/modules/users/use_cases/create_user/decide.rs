use crate::modules::users::core::profile::EmailPolicy;
use crate::modules::users::core::user::NewUser;
use crate::modules::users::use_cases::create_user::command::CreateUser;
use crate::modules::users::use_cases::create_user::decision::{
    Decision, RequiredField, ValidationError,
};

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn decide_create(command: CreateUser, email_policy: EmailPolicy) -> Decision {
    let Some(name) = present(command.name) else {
        return Decision::Rejected {
            reason: ValidationError::Missing(RequiredField::Name),
        };
    };

    let email = present(command.email);
    if email_policy == EmailPolicy::Required && email.is_none() {
        return Decision::Rejected {
            reason: ValidationError::Missing(RequiredField::Email),
        };
    }

    Decision::Accepted {
        new_user: NewUser::new(name, email),
    }
}
