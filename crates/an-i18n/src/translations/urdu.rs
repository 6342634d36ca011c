pub(super) const URDU: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "ہوم"),
    ("nav.about", "ہمارے بارے میں"),
    ("nav.products", "مصنوعات"),
    ("nav.community", "کمیونٹی"),
    ("nav.hakeems", "حکماء"),
    ("nav.contact", "رابطہ"),
    ("nav.cart", "ٹوکری"),
    ("nav.profile", "پروفائل"),
    ("nav.orders", "میرے آرڈرز"),
    // Auth dialog
    ("auth.signIn", "سائن ان"),
    ("auth.signUp", "سائن اپ"),
    ("auth.signOut", "سائن آؤٹ"),
    ("auth.email", "ای میل"),
    ("auth.password", "پاس ورڈ"),
    ("auth.name", "پورا نام"),
    ("auth.continueWithGoogle", "گوگل کے ساتھ جاری رکھیں"),
    ("auth.noAccount", "اکاؤنٹ نہیں ہے؟"),
    ("auth.haveAccount", "پہلے سے اکاؤنٹ ہے؟"),
    // OTP dialog
    ("auth.verifyTitle", "اپنی ای میل کی تصدیق کریں"),
    ("auth.otpSent", "ہم نے آپ کی ای میل پر چھ ہندسوں کا کوڈ بھیجا ہے"),
    ("auth.otpHint", "جانچ کے لیے 123456 استعمال کریں"),
    ("auth.verify", "تصدیق کریں"),
    ("auth.resend", "کوڈ دوبارہ بھیجیں"),
    ("auth.resendIn", "{seconds} سیکنڈ میں کوڈ دوبارہ بھیجیں"),
    // Toasts
    ("toast.signInSuccess", "خوش آمدید!"),
    ("toast.signUpSuccess", "تصدیقی کوڈ بھیج دیا گیا"),
    ("toast.verifySuccess", "اکاؤنٹ کامیابی سے بن گیا"),
    ("toast.otpResent", "نیا کوڈ بھیج دیا گیا ہے"),
    ("toast.signedOut", "آپ سائن آؤٹ ہو گئے ہیں"),
    // Errors
    ("error.invalidCredentials", "غلط اسناد"),
    ("error.signInFailed", "سائن ان ناکام ہو گیا"),
    ("error.signupFailed", "سائن اپ ناکام ہو گیا"),
    ("error.noPendingVerification", "کوئی زیر التواء تصدیق نہیں"),
    ("error.invalidOtp", "غلط تصدیقی کوڈ"),
    ("error.resendFailed", "کوڈ دوبارہ نہیں بھیجا جا سکا"),
    ("error.googleLoginFailed", "گوگل لاگ ان ناکام ہو گیا"),
    ("error.storage", "آپ کا سیشن محفوظ نہیں ہو سکا"),
    // Common
    ("common.loading", "لوڈ ہو رہا ہے..."),
    ("common.welcome", "خوش آمدید، {name}"),
    ("home.heroTitle", "النخوہ میں خوش آمدید"),
    ("home.heroSubtitle", "روایتی طب، جدید نگہداشت"),
    ("products.addToCart", "ٹوکری میں شامل کریں"),
    ("cart.empty", "آپ کی ٹوکری خالی ہے"),
    ("cart.checkout", "چیک آؤٹ"),
    ("footer.rights", "جملہ حقوق محفوظ ہیں"),
    ("language.toggle", "English"),
];
