pub(super) const ENGLISH: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.about", "About Us"),
    ("nav.products", "Products"),
    ("nav.community", "Community"),
    ("nav.hakeems", "Hakeems"),
    ("nav.contact", "Contact"),
    ("nav.cart", "Cart"),
    ("nav.profile", "Profile"),
    ("nav.orders", "My Orders"),
    // Auth dialog
    ("auth.signIn", "Sign In"),
    ("auth.signUp", "Sign Up"),
    ("auth.signOut", "Sign Out"),
    ("auth.email", "Email"),
    ("auth.password", "Password"),
    ("auth.name", "Full Name"),
    ("auth.continueWithGoogle", "Continue with Google"),
    ("auth.noAccount", "Don't have an account?"),
    ("auth.haveAccount", "Already have an account?"),
    // OTP dialog
    ("auth.verifyTitle", "Verify your email"),
    ("auth.otpSent", "We sent a 6-digit code to your email"),
    ("auth.otpHint", "Use 123456 for testing"),
    ("auth.verify", "Verify"),
    ("auth.resend", "Resend code"),
    ("auth.resendIn", "Resend code in {seconds}s"),
    // Toasts
    ("toast.signInSuccess", "Welcome back!"),
    ("toast.signUpSuccess", "Verification code sent"),
    ("toast.verifySuccess", "Account created successfully"),
    ("toast.otpResent", "A new code has been sent"),
    ("toast.signedOut", "You have been signed out"),
    // Errors
    ("error.invalidCredentials", "Invalid credentials"),
    ("error.signInFailed", "Sign-in failed"),
    ("error.signupFailed", "Signup failed"),
    ("error.noPendingVerification", "No pending verification"),
    ("error.invalidOtp", "Invalid OTP code"),
    ("error.resendFailed", "OTP resend failed"),
    ("error.googleLoginFailed", "Google login failed"),
    ("error.storage", "Could not save your session"),
    // Common
    ("common.loading", "Loading..."),
    ("common.welcome", "Welcome, {name}"),
    ("home.heroTitle", "Welcome to Al Nakhwa"),
    ("home.heroSubtitle", "Traditional medicine, modern care"),
    ("products.addToCart", "Add to Cart"),
    ("cart.empty", "Your cart is empty"),
    ("cart.checkout", "Checkout"),
    ("footer.rights", "All rights reserved"),
    ("language.toggle", "اردو"),
];
